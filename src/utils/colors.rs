/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Net result color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_net(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Wrap `text` in the color of `value`'s sign.
pub fn colorize_net(text: &str, value: f64) -> String {
    format!("{}{}{}", color_for_net(value), text, RESET)
}

/// Grey out zero amounts (e.g. fuel cost recorded with no vehicle profile).
pub fn colorize_amount(text: &str, value: f64) -> String {
    if value == 0.0 {
        format!("{GREY}{text}{RESET}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_sign_picks_color() {
        assert_eq!(color_for_net(10.0), GREEN);
        assert_eq!(color_for_net(-0.5), RED);
        assert_eq!(color_for_net(0.0), RESET);
        assert!(colorize_amount("R$ 0,00", 0.0).starts_with(GREY));
    }
}
