use thiserror::Error;
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("refresh period must be greater than zero")]
    InvalidRefreshPeriod,
    #[error("invalid sample range: low {low} is above high {high}")]
    InvalidSampleRange { low: i64, high: i64 },
    #[error("no sensor panels configured")]
    NoPanels,
    #[error("surface of {width}x{height} pixels is too large")]
    SurfaceTooLarge { width: u32, height: u32 },
    #[error("failed to draw on surface: {0}")]
    Draw(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ConsoleError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ConsoleError::Draw(format!("{value:?}"))
    }
}
impl From<image::ImageError> for ConsoleError {
    fn from(value: image::ImageError) -> Self {
        ConsoleError::Draw(value.to_string())
    }
}
