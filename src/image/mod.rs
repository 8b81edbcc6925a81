pub mod gray;
pub mod integral;
pub mod traits;
pub mod u8;

pub use self::gray::GrayImageU8;
pub use self::integral::IntegralImage;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
