mod predictor;

pub use predictor::SpendPredictor;
