use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    Latitude(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    Longitude(f64),
    #[error("invalid radius: {0} km, must be greater than 0")]
    Radius(f64),
    #[error("address must not be blank")]
    BlankAddress,
}
