use html_escape::{encode_double_quoted_attribute, encode_text};

/// The options of a `<select>` element: the names of the resources the page
/// currently knows about, in the order the server returned or created them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionList {
    element_id: &'static str,
    options: Vec<String>,
}

impl OptionList {
    pub fn new(element_id: &'static str) -> Self {
        Self {
            element_id,
            options: vec![],
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Replace all options with a freshly listed collection
    pub fn replace_all(&mut self, names: Vec<String>) {
        self.options = names;
    }

    pub fn append(&mut self, name: impl Into<String>) {
        self.options.push(name.into());
    }

    /// Remove the first option with this value. Returns false if there was none.
    pub fn remove(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o == value) {
            Some(index) => {
                self.options.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = format!(r#"<select id="{}">"#, self.element_id);
        for option in &self.options {
            html.push_str(&format!(
                r#"<option value="{}">{}</option>"#,
                encode_double_quoted_attribute(option),
                encode_text(option)
            ));
        }
        html.push_str("</select>");
        html
    }
}
