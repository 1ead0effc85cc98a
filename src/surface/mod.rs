mod headless;
mod traits;

pub use headless::HeadlessSurface;
pub use traits::BrowserSurface;
