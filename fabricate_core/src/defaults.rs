use crate::session::Session;
use crate::shape::FieldKind;
use rand::Rng;
use serde_json::Value;

const TEXT_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// A type-driven generator for one primitive kind.
pub type DefaultGenerator = fn(&mut Session) -> Value;

/// Looks up the default generator for a primitive kind.
///
/// Every generator returns a value that differs from the kind's zero value.
/// Containers, records and unsupported kinds have no default generator; callers
/// leave such fields untouched.
pub fn default_generator(kind: &FieldKind) -> Option<DefaultGenerator> {
    match kind {
        FieldKind::Boolean => Some(generate_bool),
        FieldKind::Integer(_) => Some(generate_integer),
        FieldKind::Float(_) => Some(generate_float),
        FieldKind::Text => Some(generate_text),
        _ => None,
    }
}

fn generate_bool(_session: &mut Session) -> Value {
    Value::Bool(true)
}

fn generate_integer(session: &mut Session) -> Value {
    Value::from(session.rng().random_range(1u8..=100u8))
}

fn generate_float(session: &mut Session) -> Value {
    Value::from(session.rng().random_range(1.0f64..2.0f64))
}

fn generate_text(session: &mut Session) -> Value {
    let length = session.config().default_text_length;
    let mut text = String::with_capacity(length);
    for i in 0..length {
        let letter = TEXT_ALPHABET[session.rng().random_range(0..TEXT_ALPHABET.len())] as char;
        if i == 0 {
            text.push(letter.to_ascii_uppercase());
        } else {
            text.push(letter);
        }
    }
    Value::String(text)
}
