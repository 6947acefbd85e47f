use std::borrow::Cow;

use inksac::prelude::*;
use rustyline::{
    completion::Completer, highlight::Highlighter, hint::Hinter, validate::Validator, Helper,
};

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color_support: ColorSupport,
}

impl Palette {
    pub fn detect(enabled: bool) -> Self {
        let support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn prompt(&self, prompt: &str) -> String {
        if !self.enabled() {
            return prompt.to_string();
        }

        let prompt_style = Style::builder().foreground(Color::Green).bold().build();
        prompt.style(prompt_style).to_string()
    }

    pub fn error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }
}

/// Line editor helper that only colours the prompt.
pub struct PromptHelper {
    palette: Palette,
}

impl PromptHelper {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl Helper for PromptHelper {}

impl Highlighter for PromptHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Owned(self.palette.prompt(prompt))
    }
}

impl Completer for PromptHelper {
    type Candidate = String;
}

impl Hinter for PromptHelper {
    type Hint = String;
}

impl Validator for PromptHelper {}
