use crate::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Turns a fortune text into something worth printing.
pub trait Presenter {
    fn render(&self, text: &str) -> Result<String>;
}

impl<F> Presenter for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, text: &str) -> Result<String> {
        Ok(self(text))
    }
}

/// Renders text in a speech bubble above an ASCII cow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cow {
    eyes: String,
    tongue: String,
    width: usize,
}

impl Default for Cow {
    fn default() -> Self {
        Self {
            eyes: "oo".into(),
            tongue: "  ".into(),
            width: 40,
        }
    }
}

impl Cow {
    pub fn new(eyes: &str, tongue: &str, width: usize) -> Result<Self> {
        if eyes.chars().count() != 2 {
            bail!("eyes must be exactly two characters, got '{eyes}'");
        }
        if tongue.chars().count() != 2 {
            bail!("tongue must be exactly two characters, got '{tongue}'");
        }
        if width == 0 {
            bail!("bubble width must be at least 1");
        }

        Ok(Self {
            eyes: eyes.to_string(),
            tongue: tongue.to_string(),
            width,
        })
    }

    fn bubble(&self, text: &str) -> String {
        let lines = wrap(text, self.width);
        let w = lines.iter().map(|l| l.width()).max().unwrap_or(0);

        let mut out = vec![format!(" {}", "_".repeat(w + 2))];
        let last = lines.len() - 1;
        for (n, line) in lines.iter().enumerate() {
            let (open, close) = match (n, lines.len()) {
                (_, 1) => ('<', '>'),
                (0, _) => ('/', '\\'),
                (n, _) if n == last => ('\\', '/'),
                _ => ('|', '|'),
            };
            let pad = " ".repeat(w - line.width());
            out.push(format!("{open} {line}{pad} {close}"));
        }
        out.push(format!(" {}", "-".repeat(w + 2)));

        out.join("\n")
    }

    fn body(&self) -> String {
        format!(
            r"        \   ^__^
         \  ({eyes})\_______
            (__)\       )\/\
             {tongue} ||----w |
                ||     ||",
            eyes = self.eyes,
            tongue = self.tongue,
        )
    }
}

impl Presenter for Cow {
    fn render(&self, text: &str) -> Result<String> {
        debug!("🐄 rendering {} chars", text.chars().count());
        Ok(format!("{}\n{}", self.bubble(text), self.body()))
    }
}

/// Greedy word wrap on terminal display width, so wide characters take two columns.
/// Explicit newlines are kept and tabs become four spaces. Spacing inside a line is kept,
/// except that the gap at a line break and trailing spaces are dropped. Words wider than
/// `width` are split. Always returns at least one line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![];

    for paragraph in text.lines() {
        let paragraph = paragraph.replace('\t', "    ");
        let mut line = String::new();
        let mut line_w = 0;
        let mut gap = String::new();

        for (n, word) in paragraph.split(' ').enumerate() {
            if n > 0 {
                gap.push(' ');
            }
            if word.is_empty() {
                continue;
            }

            let word_w = word.width();
            let fits = line_w + gap.len() + word_w <= width;
            if fits {
                line.push_str(&gap);
                line_w += gap.len();
            } else if line_w > 0 {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
            }
            gap.clear();

            if line_w + word_w <= width {
                line.push_str(word);
                line_w += word_w;
                continue;
            }

            for c in word.chars() {
                let c_w = c.width().unwrap_or(0);
                if line_w > 0 && line_w + c_w > width {
                    lines.push(std::mem::take(&mut line));
                    line_w = 0;
                }
                line.push(c);
                line_w += c_w;
            }
        }

        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
