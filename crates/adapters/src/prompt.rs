// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Form prompts: describe the fields a command needs, collect the answers.

use std::collections::BTreeMap;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;

/// Errors from prompt operations
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("invalid choice `{answer}` for {field}, expected one of: {}", options.join(", "))]
    InvalidChoice { field: String, answer: String, options: Vec<String> },

    #[error("no value for field `{0}`")]
    MissingField(String),

    #[error("prompt i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// A titled set of fields shown to the user at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub title: String,
    pub fields: Vec<Field>,
}

impl Form {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), fields: Vec::new() }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Key the answer is stored under in [`FormValues`].
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    /// One of a fixed list; the first option is the default.
    Select { options: Vec<String> },
}

impl Field {
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self { name: name.into(), label: label.into(), kind: FieldKind::Text }
    }

    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self { name: name.into(), label: label.into(), kind: FieldKind::Password }
    }

    pub fn select<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            label: label.into(),
            kind: FieldKind::Select { options: options.into_iter().map(Into::into).collect() },
        }
    }
}

/// Answers keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn require(&self, name: &str) -> Result<&str, PromptError> {
        self.get(name).ok_or_else(|| PromptError::MissingField(name.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Collects form input from the user.
#[async_trait]
pub trait PromptProvider: Clone + Send + Sync + 'static {
    /// `Ok(None)` means the user dismissed the form.
    async fn prompt(&self, form: &Form) -> Result<Option<FormValues>, PromptError>;
}

struct LineIo {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
}

/// Line-oriented prompt: one answer line per field.
///
/// End of input, or an empty answer to the first text field, dismisses the
/// form. Password answers are read like any other line.
#[derive(Clone)]
pub struct LinePrompt {
    io: Arc<Mutex<LineIo>>,
}

impl LinePrompt {
    /// Read answers from stdin, print labels to stderr.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }

    pub fn new(input: impl BufRead + Send + 'static, output: impl Write + Send + 'static) -> Self {
        Self { io: Arc::new(Mutex::new(LineIo { input: Box::new(input), output: Box::new(output) })) }
    }
}

#[async_trait]
impl PromptProvider for LinePrompt {
    async fn prompt(&self, form: &Form) -> Result<Option<FormValues>, PromptError> {
        let shared = Arc::clone(&self.io);
        let form = form.clone();
        tokio::task::spawn_blocking(move || shared.lock().ask(&form))
            .await
            .map_err(|e| PromptError::Io(io::Error::other(e)))?
    }
}

impl LineIo {
    fn ask(&mut self, form: &Form) -> Result<Option<FormValues>, PromptError> {
        writeln!(self.output, "{}", form.title)?;

        let mut values = FormValues::new();
        for (index, field) in form.fields.iter().enumerate() {
            self.show_field(field)?;
            let Some(answer) = self.read_answer()? else {
                tracing::debug!(form = %form.title, "prompt dismissed at end of input");
                return Ok(None);
            };

            let value = match &field.kind {
                FieldKind::Select { options } => choose(field, options, &answer)?,
                FieldKind::Text | FieldKind::Password => {
                    if index == 0 && answer.is_empty() {
                        return Ok(None);
                    }
                    answer
                }
            };
            values.insert(field.name.as_str(), value);
        }
        Ok(Some(values))
    }

    fn show_field(&mut self, field: &Field) -> io::Result<()> {
        match &field.kind {
            FieldKind::Select { options } => {
                for (i, option) in options.iter().enumerate() {
                    writeln!(self.output, "  {}) {}", i + 1, option)?;
                }
                let default = options.first().map(String::as_str).unwrap_or_default();
                write!(self.output, "{} [{}]: ", field.label, default)?;
            }
            FieldKind::Text | FieldKind::Password => write!(self.output, "{}: ", field.label)?,
        }
        self.output.flush()
    }

    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Accept an option by 1-based number or exact text; empty picks the first.
fn choose(field: &Field, options: &[String], answer: &str) -> Result<String, PromptError> {
    let answer = answer.trim();
    let picked = if answer.is_empty() {
        options.first()
    } else if let Ok(n) = answer.parse::<usize>() {
        n.checked_sub(1).and_then(|i| options.get(i))
    } else {
        options.iter().find(|option| option.as_str() == answer)
    };

    picked.cloned().ok_or_else(|| PromptError::InvalidChoice {
        field: field.label.clone(),
        answer: answer.to_string(),
        options: options.to_vec(),
    })
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{Form, FormValues, PromptError, PromptProvider};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;

    #[derive(Default)]
    struct FakePromptState {
        answers: VecDeque<Option<FormValues>>,
        shown: Vec<Form>,
    }

    /// Fake prompt with scripted answers. Dismisses once the script runs out.
    #[derive(Clone, Default)]
    pub struct FakePrompt {
        inner: Arc<Mutex<FakePromptState>>,
    }

    impl FakePrompt {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue an answer for the next form.
        pub fn answer<I, K, V>(self, values: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.inner.lock().answers.push_back(Some(values.into_iter().collect()));
            self
        }

        /// Queue a dismissal for the next form.
        pub fn dismiss(self) -> Self {
            self.inner.lock().answers.push_back(None);
            self
        }

        /// Forms shown so far.
        pub fn shown(&self) -> Vec<Form> {
            self.inner.lock().shown.clone()
        }
    }

    #[async_trait]
    impl PromptProvider for FakePrompt {
        async fn prompt(&self, form: &Form) -> Result<Option<FormValues>, PromptError> {
            let mut inner = self.inner.lock();
            inner.shown.push(form.clone());
            Ok(inner.answers.pop_front().flatten())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePrompt;
