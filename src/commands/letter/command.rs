use crate::commands::command::Command;
use crate::commands::context::CommandContext;
use crate::commands::plugins::PluginDescriptor;
use crate::core::prelude::*;

const STYLED: [&str; 26] = [
    "ᥲ", "ᑲ", "ᥴ", "ძ", "ᥱ", "𝖿", "g", "һ", "і", "ȷ", "k", "ᥣ", "m", "ᥒ", "᥆", "⍴", "𝗊", "r",
    "s", "𝗍", "ᥙ", "᥎", "ᥕ", "᥊", "ᥡ", "z",
];

/// Swaps ASCII letters, either case, for their styled glyph.
pub fn stylize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let index = (c.to_ascii_lowercase() as u8 - b'a') as usize;
                STYLED[index].to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct LetterCommand;

impl LetterCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Command for LetterCommand {
    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor::new(["letter"])
            .tags(["fun"])
            .help(["letter *<text>*"])
            .register(true)
    }

    async fn execute(&self, ctx: &CommandContext<'_>) -> Result<String> {
        let source = Some(ctx.text)
            .filter(|text| !text.trim().is_empty())
            .or_else(|| {
                ctx.message
                    .quoted_text
                    .as_deref()
                    .filter(|text| !text.trim().is_empty())
            });

        Ok(match source {
            Some(text) => stylize(text),
            None => "Please enter the text you want to transform.".to_string(),
        })
    }
}
