use crate::report::Translator;

/// Separator which renders one fragment per line of text
pub const SEPARATOR_NEWLINE: &str = "\n";

/// Separator which renders one fragment per line of HTML
pub const SEPARATOR_HTML: &str = "<br>";

/// Builds a report translator
///
/// The builder comes with a sensible set of default options.
/// Decoded fragments are separated by newlines unless
/// configured otherwise.
///
/// ```
/// use metartext::TranslatorBuilder;
///
/// let translator = TranslatorBuilder::new()
///     .with_html_line_breaks()
///     .build();
///
/// assert_eq!(
///     "Station: LFPG<br>Pressure: 1013 hPa.",
///     translator.translate("LFPG Q1013")
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TranslatorBuilder {
    separator: String,
}

impl TranslatorBuilder {
    /// New translator with "sensible" defaults
    pub fn new() -> Self {
        Self {
            separator: SEPARATOR_NEWLINE.to_owned(),
        }
    }

    /// Build a translator
    pub fn build(&self) -> Translator {
        Translator::from(self)
    }

    /// Fragment separator
    ///
    /// Decoded fragments are joined with `separator`. Any string
    /// is permitted, including the empty string.
    pub fn with_separator<S>(&mut self, separator: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.separator = separator.into();
        self
    }

    /// Separate fragments with HTML line breaks (`<br>`)
    pub fn with_html_line_breaks(&mut self) -> &mut Self {
        self.with_separator(SEPARATOR_HTML)
    }

    /// Fragment separator
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl std::default::Default for TranslatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
