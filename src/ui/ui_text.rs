/// All user facing strings in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub version_tag: &'static str,
    pub ticker_heading: &'static str,
    pub label_amount: &'static str,
    pub label_month: &'static str,
    pub label_currency: &'static str,
    pub button_pause: &'static str,
    pub button_resume: &'static str,
    pub button_prev_month: &'static str,
    pub button_next_month: &'static str,
    pub label_low_motion: &'static str,
    pub tooltip_low_motion: &'static str,
    pub tooltip_prev_month: &'static str,
    pub tooltip_next_month: &'static str,
    pub label_paused: &'static str,
    pub warning_amount_invalid: &'static str,
    pub help_title: &'static str,
    pub help_intro: &'static str,
    pub help_pause: &'static str,
    pub help_low_motion: &'static str,
    pub help_prev_month: &'static str,
    pub help_next_month: &'static str,
    pub help_toggle: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "SalaryFlow",
    version_tag: concat!("SalaryFlow v", env!("CARGO_PKG_VERSION")),
    ticker_heading: "EARNED THIS MONTH",
    label_amount: "Monthly salary",
    label_month: "Month",
    label_currency: "Currency",
    button_pause: "⏸ Pause",
    button_resume: "▶ Resume",
    button_prev_month: "◀",
    button_next_month: "▶",
    label_low_motion: "Low motion",
    tooltip_low_motion: "Turn the particles, glow and pulse on or off",
    tooltip_prev_month: "Previous month",
    tooltip_next_month: "Next month",
    label_paused: "PAUSED",
    warning_amount_invalid: "Not a number, counting as 0",
    help_title: "⌨ Keyboard Shortcuts",
    help_intro: "Shortcuts are ignored while a text field has focus:",
    help_pause: "Pause / resume the ticker",
    help_low_motion: "Toggle low motion mode",
    help_prev_month: "Previous month",
    help_next_month: "Next month",
    help_toggle: "Toggle this help panel",
};
