//! Column alignment for generated declarations
//!
//! Every aligned block (variant list, field list, visitor methods) pads
//! its labels to the widest label of that block, so unchanged tables
//! regenerate byte-identical files.

/// Alignment width computed once over a block of labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alignment {
    width: usize,
}

impl Alignment {
    /// Width of the longest label; an empty block has width 0
    pub fn over<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let width = labels
            .into_iter()
            .map(|label| label_len(label.as_ref()))
            .max()
            .unwrap_or(0);
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `label`, padding, then `suffix`: `Assign  (`
    pub fn pad(&self, label: &str, suffix: &str) -> String {
        let mut out = String::with_capacity(self.width + suffix.len());
        out.push_str(label);
        out.push_str(&self.padding(label));
        out.push_str(suffix);
        out
    }

    /// `label` with `suffix` attached, then padding: `name:  `
    pub fn pad_after(&self, label: &str, suffix: &str) -> String {
        let mut out = String::with_capacity(self.width + suffix.len());
        out.push_str(label);
        out.push_str(suffix);
        out.push_str(&self.padding(label));
        out
    }

    fn padding(&self, label: &str) -> String {
        " ".repeat(self.width.saturating_sub(label_len(label)))
    }
}

/// Pad every label to a common column followed by `suffix`
pub fn align_labels<S: AsRef<str>>(labels: &[S], suffix: &str) -> Vec<String> {
    let alignment = Alignment::over(labels);
    labels
        .iter()
        .map(|label| alignment.pad(label.as_ref(), suffix))
        .collect()
}

fn label_len(label: &str) -> usize {
    label.chars().count()
}
