//! Property dialogs for interactive operator invocation.
//!
//! An operator invoked interactively may show a small form first (the
//! host pops one up under the cursor). The form itself is plain data; who
//! answers it is a [`DialogDriver`], which in a headless run is either
//! [`AcceptDefaults`] or a closure scripting the user's edits.

/// One editable text field of a dialog.
#[derive(Clone, Debug)]
pub struct StringField {
    /// Stable field key, used by operators to read the value back.
    pub name: &'static str,
    /// Human-readable label shown next to the field.
    pub label: String,
    /// Current value, pre-filled with the operator's default.
    pub value: String,
}

/// A property form presented before an operator runs.
#[derive(Clone, Debug, Default)]
pub struct DialogForm {
    /// Dialog title, usually the operator label.
    pub title: String,
    fields: Vec<StringField>,
}

impl DialogForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style field append.
    pub fn with_field(
        mut self,
        name: &'static str,
        label: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        self.fields.push(StringField {
            name,
            label: label.into(),
            value: default.into(),
        });
        self
    }

    pub fn fields(&self) -> &[StringField] {
        &self.fields
    }

    /// Current value of a field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Set a field's value. Returns false if the field does not exist.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }
}

/// Outcome of presenting a dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogChoice {
    /// The user confirmed; the operator runs with the edited values.
    Confirm,
    /// The user dismissed the dialog; nothing runs.
    Cancel,
}

/// Answers property dialogs on behalf of the user.
pub trait DialogDriver: Send {
    /// Present `form`, possibly edit its values, and decide.
    fn prompt(&mut self, form: &mut DialogForm) -> DialogChoice;
}

/// Driver that confirms every dialog with its default values.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptDefaults;

impl DialogDriver for AcceptDefaults {
    fn prompt(&mut self, _form: &mut DialogForm) -> DialogChoice {
        DialogChoice::Confirm
    }
}

/// Closures double as drivers, which keeps scripted runs terse.
impl<F> DialogDriver for F
where
    F: FnMut(&mut DialogForm) -> DialogChoice + Send,
{
    fn prompt(&mut self, form: &mut DialogForm) -> DialogChoice {
        self(form)
    }
}
