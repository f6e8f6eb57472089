use std::io::{self, BufRead, Write};

use validator::Validate;

use crate::cli::display::render_results;
use crate::core::SearchEngine;
use crate::models::{ScorerKind, SearchRequest};

/// Resolve an engine letter code, falling back to Levenshtein.
///
/// Returns the engine and whether the fallback was taken.
pub fn resolve_engine(code: Option<&str>) -> (ScorerKind, bool) {
    match code.and_then(ScorerKind::from_code) {
        Some(kind) => (kind, false),
        None => (ScorerKind::default(), code.is_some()),
    }
}

/// Interactive request/response loop over any reader and writer
pub struct Session<'a, R, W> {
    engine: &'a SearchEngine,
    input: R,
    output: W,
    json: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(engine: &'a SearchEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            json: false,
        }
    }

    /// Print results as JSON instead of cards
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next line of input, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn print_header(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}Local Restaurant Search\n", "\t".repeat(5))?;
        writeln!(self.output, "{}{}", "\t".repeat(4), "-".repeat(40))?;
        writeln!(
            self.output,
            "{}You can use either search metric: Levenshtein or Jaro-Winkler\n",
            "\t".repeat(3)
        )
    }

    fn print_usage(&mut self) -> io::Result<()> {
        writeln!(self.output, "There are four filters to use: distance, customer rating, price and cuisine type\n")?;
        writeln!(self.output, "Distance, customer rating and price are all integers while cuisine type is a string.\n")?;
        writeln!(self.output, "Enter your query in the following manner: 'query,distance,customer rating,price,cuisine type'\n")
    }

    /// Use the preset engine code if given, otherwise ask for one
    pub fn choose_engine(&mut self, preset: Option<&str>) -> io::Result<ScorerKind> {
        let code = match preset {
            Some(code) => Some(code.to_string()),
            None => self.prompt("Type L for Levenshtein or J for Jaro-Winkler: ")?,
        };

        let (kind, fell_back) = resolve_engine(code.as_deref());
        if fell_back {
            writeln!(self.output, "Defaulting to Levenshtein Distance Metric")?;
        }
        tracing::debug!("Using {} scorer", kind);

        Ok(kind)
    }

    /// Run one search and print its outcome
    pub fn run_query(&mut self, input: &str, engine: ScorerKind) -> io::Result<()> {
        let request = SearchRequest::new(input.trim(), engine);
        if let Err(errors) = request.validate() {
            tracing::debug!("Rejected search request: {:?}", errors);
            writeln!(self.output, "Please enter a query.")?;
            return Ok(());
        }

        let outcome = self.engine.search(&request);

        if self.json {
            let response = outcome.into_response(&request);
            serde_json::to_writer_pretty(&mut self.output, &response)?;
            writeln!(self.output)?;
            return Ok(());
        }

        if let Some(e) = &outcome.filter_error {
            writeln!(self.output, "Invalid filters provided: {}", e)?;
        }
        writeln!(self.output, "Users filter query:{}", outcome.filter.expression())?;
        writeln!(self.output, "Number of searchable documents:{}", outcome.total_candidates)?;

        render_results(
            &mut self.output,
            &outcome.results,
            self.engine.settings().display_limit,
        )
    }

    /// Drive the loop until the user declines to search again or input ends.
    ///
    /// Returns the number of queries answered.
    pub fn run(&mut self, preset_engine: Option<&str>) -> io::Result<usize> {
        self.print_header()?;
        let kind = self.choose_engine(preset_engine)?;
        self.print_usage()?;

        let mut answered = 0;
        loop {
            let Some(line) = self.prompt("Enter your query:")? else {
                break;
            };
            self.run_query(&line, kind)?;
            answered += 1;

            let again = self.prompt("Do you want to search again or quit, enter y/n:")?;
            if !matches!(again.as_deref().map(str::trim), Some("y" | "Y")) {
                break;
            }
        }

        Ok(answered)
    }
}
