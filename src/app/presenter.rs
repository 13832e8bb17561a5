use crate::core::session::ResultState;
use crate::core::Record;
use std::io::{self, Write};

pub const TITLE: &str = "Disease Symptoms & Precautions";
pub const PROMPT: &str = "Enter disease name: ";
pub const LOADING: &str = "Loading...";

/// Renders the search form and the current result state as plain text.
pub struct Presenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn title(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", TITLE)?;
        writeln!(self.out, "{}", "=".repeat(TITLE.chars().count()))?;
        self.out.flush()
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()
    }

    pub fn render(&mut self, state: &ResultState) -> io::Result<()> {
        match state {
            ResultState::Idle => {}
            ResultState::Loading => writeln!(self.out, "{}", LOADING)?,
            ResultState::Found(record) => self.render_record(record)?,
            ResultState::NotFound | ResultState::Failed(_) => {
                if let Some(message) = state.message() {
                    writeln!(self.out, "❌ {}", message)?;
                }
            }
        }
        self.out.flush()
    }

    fn render_record(&mut self, record: &Record) -> io::Result<()> {
        self.render_list("Symptoms", &record.symptoms)?;
        self.render_list("Precautions", &record.precautions)
    }

    fn render_list(&mut self, heading: &str, items: &[String]) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", heading)?;
        for item in items {
            writeln!(self.out, "  • {}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(state: &ResultState) -> String {
        let mut presenter = Presenter::new(Vec::new());
        presenter.render(state).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_render_found_lists_in_order() {
        let record = Record::new(["fever", "cough"], ["rest", "fluids"]);

        let output = rendered(&ResultState::Found(record));

        assert_eq!(
            output,
            "\nSymptoms\n  • fever\n  • cough\n\nPrecautions\n  • rest\n  • fluids\n"
        );
    }

    #[test]
    fn test_render_errors_and_loading() {
        assert_eq!(rendered(&ResultState::Loading), "Loading...\n");
        assert_eq!(rendered(&ResultState::NotFound), "❌ Disease not found.\n");
        assert_eq!(
            rendered(&ResultState::Failed("Failed to fetch data.".to_string())),
            "❌ Failed to fetch data.\n"
        );
        assert_eq!(rendered(&ResultState::Idle), "");
    }

    #[test]
    fn test_title_and_prompt() {
        let mut presenter = Presenter::new(Vec::new());
        presenter.title().unwrap();
        presenter.prompt().unwrap();

        let output = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(output.starts_with("Disease Symptoms & Precautions\n"));
        assert!(output.ends_with("Enter disease name: "));
    }
}
