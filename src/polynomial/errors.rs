use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PolynomialError {
    #[error("division of polynomial by zero scalar")]
    DivisionByZero,
}
