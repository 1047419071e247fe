pub struct Config {
    /// Skips the banner printed before every command.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `0` prints everything, `1` drops headers and decorations,
    /// `2` prints only verdicts.
    pub quiet: u8,
    /// Hides the identifying digits of every tax id printed.
    ///
    /// Does not affect validation, only what reaches the terminal.
    pub redact: bool,
}
