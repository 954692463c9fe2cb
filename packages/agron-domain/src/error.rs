pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unable to decode image, {0}")]
	DecodeImage(#[from] image::ImageError),
}
