//! Attribute schemas for the built-in entity kinds.
//!
//! A schema names a kind and lists the attributes it declares, each with a
//! type and an implied zero default. Schemas are inert data: the store never
//! rejects an attribute, it only coerces values assigned to declared ones.

use crate::Value;

/// Declared type of a schema attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    /// Text, default `""`
    String,
    /// Integer, default `0`
    Int,
    /// Floating point, default `0.0`
    Float,
    /// List of ids, default `[]`
    StringList,
}

impl AttrType {
    /// Value an unset attribute reads as.
    pub fn default_value(&self) -> Value {
        match self {
            AttrType::String => Value::String(String::new()),
            AttrType::Int => Value::Int(0),
            AttrType::Float => Value::Float(0.0),
            AttrType::StringList => Value::Array(Vec::new()),
        }
    }

    /// Coerce an assigned value to this type when it can be done without loss.
    ///
    /// Values that do not convert cleanly are returned unchanged.
    pub fn coerce(&self, value: Value) -> Value {
        match (self, value) {
            (AttrType::String, Value::Int(i)) => Value::String(i.to_string()),
            (AttrType::String, Value::Float(f)) => Value::String(Value::Float(f).repr()),
            (AttrType::Int, Value::String(s)) => match s.trim().parse::<i64>() {
                Ok(i) => Value::Int(i),
                Err(_) => Value::String(s),
            },
            (AttrType::Int, Value::Float(f))
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 =>
            {
                Value::Int(f as i64)
            }
            (AttrType::Float, Value::Int(i)) => Value::Float(i as f64),
            // Non-finite floats have no JSON form, so they stay text
            (AttrType::Float, Value::String(s)) => {
                match s.trim().parse::<f64>().ok().filter(|f| f.is_finite()) {
                    Some(f) => Value::Float(f),
                    None => Value::String(s),
                }
            }
            (_, other) => other,
        }
    }
}

/// One declared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Attribute name
    pub name: &'static str,
    /// Declared type
    pub ty: AttrType,
}

const fn attr(name: &'static str, ty: AttrType) -> AttributeSpec {
    AttributeSpec { name, ty }
}

/// Schema of one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySchema {
    /// Type name, as used in commands and in the persisted type tag
    pub name: &'static str,
    /// Declared attributes
    pub attributes: &'static [AttributeSpec],
}

impl EntitySchema {
    /// Look up a declared attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Coerce a value for assignment to `name`.
    pub fn coerce(&self, name: &str, value: Value) -> Value {
        match self.attribute(name) {
            Some(spec) => spec.ty.coerce(value),
            None => value,
        }
    }
}

use AttrType::{Float, Int, String as Str, StringList};

/// The root kind; carries only identity and timestamps.
pub const BASE_MODEL: EntitySchema = EntitySchema {
    name: "BaseModel",
    attributes: &[],
};

/// An account holder.
pub const USER: EntitySchema = EntitySchema {
    name: "User",
    attributes: &[
        attr("email", Str),
        attr("password", Str),
        attr("first_name", Str),
        attr("last_name", Str),
    ],
};

/// A state or province.
pub const STATE: EntitySchema = EntitySchema {
    name: "State",
    attributes: &[attr("name", Str)],
};

/// A city inside a state.
pub const CITY: EntitySchema = EntitySchema {
    name: "City",
    attributes: &[attr("state_id", Str), attr("name", Str)],
};

/// A feature a place can offer.
pub const AMENITY: EntitySchema = EntitySchema {
    name: "Amenity",
    attributes: &[attr("name", Str)],
};

/// A rentable place.
pub const PLACE: EntitySchema = EntitySchema {
    name: "Place",
    attributes: &[
        attr("city_id", Str),
        attr("user_id", Str),
        attr("name", Str),
        attr("description", Str),
        attr("number_rooms", Int),
        attr("number_bathrooms", Int),
        attr("max_guest", Int),
        attr("price_by_night", Int),
        attr("latitude", Float),
        attr("longitude", Float),
        attr("amenity_ids", StringList),
    ],
};

/// A user's review of a place.
pub const REVIEW: EntitySchema = EntitySchema {
    name: "Review",
    attributes: &[
        attr("place_id", Str),
        attr("user_id", Str),
        attr("text", Str),
    ],
};

/// Every built-in schema, in registration order.
pub const BUILTIN_SCHEMAS: &[EntitySchema] =
    &[BASE_MODEL, USER, PLACE, STATE, CITY, AMENITY, REVIEW];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Str.default_value(), Value::String(String::new()));
        assert_eq!(Int.default_value(), Value::Int(0));
        assert_eq!(Float.default_value(), Value::Float(0.0));
        assert_eq!(StringList.default_value(), Value::Array(vec![]));
    }

    #[test]
    fn test_int_attribute_coercion() {
        assert_eq!(PLACE.coerce("number_rooms", Value::from("4")), Value::Int(4));
        assert_eq!(PLACE.coerce("number_rooms", Value::Float(4.0)), Value::Int(4));
        // Lossy conversions are refused
        assert_eq!(PLACE.coerce("number_rooms", Value::Float(4.5)), Value::Float(4.5));
        assert_eq!(
            PLACE.coerce("number_rooms", Value::from("four")),
            Value::from("four")
        );
    }

    #[test]
    fn test_float_attribute_coercion() {
        assert_eq!(PLACE.coerce("latitude", Value::Int(37)), Value::Float(37.0));
        assert_eq!(PLACE.coerce("latitude", Value::from("37.77")), Value::Float(37.77));
    }

    #[test]
    fn test_float_attribute_keeps_non_finite_text() {
        for text in ["inf", "-inf", "nan", "infinity", "1e999"] {
            assert_eq!(PLACE.coerce("latitude", Value::from(text)), Value::from(text));
        }
    }

    #[test]
    fn test_string_attribute_coercion() {
        assert_eq!(USER.coerce("first_name", Value::Int(7)), Value::from("7"));
        assert_eq!(USER.coerce("first_name", Value::Float(1.5)), Value::from("1.5"));
    }

    #[test]
    fn test_undeclared_attribute_untouched() {
        assert_eq!(USER.coerce("age", Value::Int(89)), Value::Int(89));
        assert_eq!(BASE_MODEL.coerce("name", Value::Int(1)), Value::Int(1));
    }

    #[test]
    fn test_builtin_names_unique() {
        let mut names: Vec<_> = BUILTIN_SCHEMAS.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_SCHEMAS.len());
    }
}
