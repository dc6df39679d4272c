//! Numeric operand fields
//!
//! Fields are edited as free text and read back through [`parse_operand`],
//! which never rejects input: anything that is not an integer reads as 0.

/// Read a field's text as an operand, coercing invalid input to 0
pub fn parse_operand(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

/// Which operand field is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Value,
    Position,
}

/// Text buffer behind one numeric input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandField {
    text: String,
}

impl OperandField {
    pub fn new(value: i64) -> Self {
        OperandField {
            text: value.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> i64 {
        parse_operand(&self.text)
    }

    /// Append a typed character; only digits and a leading minus are kept
    pub fn push(&mut self, c: char) -> bool {
        let accepted = c.is_ascii_digit() || (c == '-' && self.text.is_empty());
        if accepted {
            self.text.push(c);
        }
        accepted
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn set(&mut self, value: i64) {
        self.text = value.to_string();
    }
}
