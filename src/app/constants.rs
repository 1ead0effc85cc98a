/// Name used for the window title suffix and the control channel filename.
pub const APP_NAME: &str = "ebb";
