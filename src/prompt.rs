use crate::error::{Result, SetupError};

/// Menu entry that selects every remaining option at once.
pub const ALL: &str = "All";
/// Menu entry that finishes with nothing selected.
pub const NONE: &str = "None";
/// Menu entry that finishes with whatever was picked so far.
pub const DONE: &str = "Done";

/// The single-choice primitive the multi-select loop is built on.
pub trait ChoicePrompt {
    /// Present `options` under `label` and return the one the user picked.
    fn choose(&mut self, label: &str, options: &[String]) -> Result<String>;
}

/// Terminal implementation backed by `inquire::Select`.
pub struct InquirePrompt;

impl InquirePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl ChoicePrompt for InquirePrompt {
    fn choose(&mut self, label: &str, options: &[String]) -> Result<String> {
        inquire::Select::new(label, options.to_vec())
            .prompt()
            .map_err(|e| SetupError::Prompt(e.to_string()))
    }
}

/// Multi-select emulated by a repeated single-choice menu.
///
/// Every round offers `All`, `None`, `Done` followed by the options not yet
/// picked. Picking an option removes it from the menu; `All` returns every
/// option ever offered regardless of earlier picks; `None` returns the empty
/// set, discarding earlier picks; `Done` returns the picks accumulated so
/// far. Once every option has been picked individually, only `Done` remains.
pub fn multi_select(
    prompt: &mut dyn ChoicePrompt,
    label: &str,
    options: &[String],
) -> Result<Vec<String>> {
    if options.is_empty() {
        return Ok(Vec::new());
    }

    let mut remaining: Vec<String> = options.to_vec();
    let mut chosen: Vec<String> = Vec::new();

    loop {
        let mut menu: Vec<String> = if remaining.is_empty() {
            vec![DONE.to_string()]
        } else {
            vec![ALL.to_string(), NONE.to_string(), DONE.to_string()]
        };
        menu.extend(remaining.iter().cloned());

        let picked = prompt.choose(label, &menu)?;

        match picked.as_str() {
            ALL => return Ok(options.to_vec()),
            NONE => return Ok(Vec::new()),
            DONE => return Ok(chosen),
            item => {
                if let Some(pos) = remaining.iter().position(|o| o == item) {
                    chosen.push(remaining.remove(pos));
                }
            }
        }
    }
}
