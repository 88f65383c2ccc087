/// Runtime flags shared by every command.
pub struct Config {
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Disables ANSI colors in all terminal output.
    pub no_color: bool,
}
