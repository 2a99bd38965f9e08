use owo_colors::{OwoColorize, Style};

/// A source span representing a range of bytes in the script text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A label pointing to a specific span in the source
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// A fatal error ready to be rendered
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub code: Option<String>,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(format!("note: {}", note.into()));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.notes.push(format!("help: {}", help.into()));
        self
    }
}

/// Computes 1-based line and column from a byte offset
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

fn line_text(source: &str, line_num: usize) -> Option<&str> {
    source
        .split('\n')
        .nth(line_num.checked_sub(1)?)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Renders diagnostics in a rustc-like layout
pub struct DiagnosticRenderer<'a> {
    source: &'a str,
    file_name: &'a str,
    use_color: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(source: &'a str, file_name: &'a str, use_color: bool) -> Self {
        Self {
            source,
            file_name,
            use_color,
        }
    }

    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();
        let gutter_style = Style::new().blue().bold();

        let severity = self.paint("error", Style::new().red().bold());
        let message = self.paint(&diagnostic.message, Style::new().bold());
        match &diagnostic.code {
            Some(code) => output.push_str(&format!("{}[{}]: {}\n", severity, code, message)),
            None => output.push_str(&format!("{}: {}\n", severity, message)),
        }

        if let Some(first) = diagnostic.labels.first() {
            let (line, col) = line_col(self.source, first.span.start);
            output.push_str(&format!("  {} {}:{}:{}\n", self.paint("-->", gutter_style), self.file_name, line, col));

            let width = diagnostic
                .labels
                .iter()
                .map(|label| line_col(self.source, label.span.start).0.to_string().len())
                .max()
                .unwrap_or(1);
            let empty_gutter = format!("{} {}", " ".repeat(width), self.paint("|", gutter_style));

            output.push_str(&empty_gutter);
            output.push('\n');
            for label in &diagnostic.labels {
                self.render_label(&mut output, label, width, &empty_gutter);
            }
            output.push_str(&empty_gutter);
            output.push('\n');
        }

        for note in &diagnostic.notes {
            output.push_str(&format!("  {} {}\n", self.paint("=", gutter_style), note));
        }

        output
    }

    fn render_label(&self, output: &mut String, label: &Label, width: usize, empty_gutter: &str) {
        let (line_num, start_col) = line_col(self.source, label.span.start);
        let Some(content) = line_text(self.source, line_num) else {
            return;
        };

        let number = format!("{:>width$}", line_num, width = width);
        output.push_str(&format!("{} {} {}\n", self.paint(&number, Style::new().blue().bold()), self.paint("|", Style::new().blue().bold()), content));

        // Spans never cross a line; clamp to the end of this one.
        let (end_line, end_col) = line_col(self.source, label.span.end);
        let line_end_col = content.chars().count() + 1;
        let end_col = if end_line == line_num { end_col.min(line_end_col) } else { line_end_col };
        let carets = "^".repeat(end_col.saturating_sub(start_col).max(1));

        let mut underline = format!("{}{}", " ".repeat(start_col - 1), carets);
        if !label.message.is_empty() {
            underline.push(' ');
            underline.push_str(&label.message);
        }
        output.push_str(&format!("{} {}\n", empty_gutter, self.paint(&underline, Style::new().red().bold())));
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.use_color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Render multiple diagnostics followed by an abort summary
pub fn render_diagnostics(source: &str, file_name: &str, diagnostics: &[Diagnostic], use_color: bool) -> String {
    let renderer = DiagnosticRenderer::new(source, file_name, use_color);
    let mut output = String::new();

    for diagnostic in diagnostics {
        output.push_str(&renderer.render(diagnostic));
        output.push('\n');
    }

    let count = diagnostics.len();
    if count > 0 {
        output.push_str(&format!("error: aborting due to {} error{}\n", count, if count == 1 { "" } else { "s" }));
    }

    output
}
