use crate::error::{Id3Error, Result};
use std::fmt::Debug;

/// Anything that can be used as a class label.
///
/// Closed enums (`enum Play { Yes, No }`) and `String` both qualify.
pub trait Label: Debug + Clone + PartialEq + Send + Sync + 'static {}
impl<T> Label for T where T: Debug + Clone + PartialEq + Send + Sync + 'static {}

/// A named categorical variable with a finite set of values.
///
/// Values are addressed by their position in `values`, so the domain name
/// travels with every value index and two domains never get confused even
/// when they share a value spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeDomain {
    name: String,
    values: Vec<String>,
}

impl AttributeDomain {
    /// Creates a new domain.
    ///
    /// # Errors
    ///
    /// Fails when `values` is empty or contains duplicates.
    pub fn new<S: Into<String>, V: Into<String>>(
        name: S,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self> {
        let name = name.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();

        if values.is_empty() {
            return Err(Id3Error::InvalidDomain {
                name,
                reason: "a domain needs at least one value".into(),
            });
        }
        for (i, value) in values.iter().enumerate() {
            if values[..i].contains(value) {
                return Err(Id3Error::InvalidDomain {
                    name,
                    reason: format!("duplicate value '{}'", value),
                });
            }
        }

        Ok(Self { name, values })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value_index(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    pub fn value_name(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub(crate) fn push_value(&mut self, value: String) -> usize {
        self.values.push(value);
        self.values.len() - 1
    }

    pub(crate) fn with_name(name: String) -> Self {
        Self {
            name,
            values: Vec::new(),
        }
    }
}

/// One attribute-value pair of an instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub attribute: usize,
    pub value: usize,
}

impl Assignment {
    pub fn new(attribute: usize, value: usize) -> Self {
        Self { attribute, value }
    }
}

/// A query instance: attribute-value assignments without a label.
///
/// It may be partial; evaluation only needs the attributes the tree tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Instance {
    assignments: Vec<Assignment>,
}

impl Instance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, attribute: usize, value: usize) -> Self {
        self.assignments.push(Assignment::new(attribute, value));
        self
    }

    /// Resolves `(attribute name, value name)` pairs against `domains`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAttribute` or `UnknownValue` when a name doesn't resolve.
    pub fn parse(domains: &[AttributeDomain], pairs: &[(&str, &str)]) -> Result<Self> {
        let mut instance = Self::new();
        for &(name, value) in pairs {
            let attribute = domains
                .iter()
                .position(|domain| domain.name() == name)
                .ok_or_else(|| Id3Error::UnknownAttribute(name.to_string()))?;
            let value_index =
                domains[attribute]
                    .value_index(value)
                    .ok_or_else(|| Id3Error::UnknownValue {
                        attribute: name.to_string(),
                        value: value.to_string(),
                    })?;
            instance = instance.with(attribute, value_index);
        }
        Ok(instance)
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Returns a copy of the instance without the assignment at `position`.
    pub fn without(&self, position: usize) -> Self {
        let mut assignments = self.assignments.clone();
        if position < assignments.len() {
            assignments.remove(position);
        }
        Self { assignments }
    }
}

impl FromIterator<Assignment> for Instance {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlook() -> AttributeDomain {
        AttributeDomain::new("Outlook", ["Sunny", "Overcast", "Rain"]).unwrap()
    }

    #[test]
    fn test_domain_new() {
        let domain = outlook();
        assert_eq!(domain.name(), "Outlook");
        assert_eq!(domain.len(), 3);
        assert_eq!(domain.value_index("Rain"), Some(2));
        assert_eq!(domain.value_name(1), Some("Overcast"));
        assert_eq!(domain.value_index("Snow"), None);
    }

    #[test]
    fn test_domain_rejects_empty() {
        let result = AttributeDomain::new("Empty", Vec::<String>::new());
        assert!(matches!(result, Err(Id3Error::InvalidDomain { .. })));
    }

    #[test]
    fn test_domain_rejects_duplicates() {
        let result = AttributeDomain::new("Wind", ["Weak", "Strong", "Weak"]);
        assert!(matches!(result, Err(Id3Error::InvalidDomain { .. })));
    }

    #[test]
    fn test_instance_parse() {
        let wind = AttributeDomain::new("Wind", ["Weak", "Strong"]).unwrap();
        let domains = vec![outlook(), wind];
        let instance = Instance::parse(&domains, &[("Wind", "Strong"), ("Outlook", "Rain")]).unwrap();

        assert_eq!(
            instance.assignments(),
            &[Assignment::new(1, 1), Assignment::new(0, 2)]
        );
    }

    #[test]
    fn test_instance_parse_unknown_names() {
        let domains = vec![outlook()];

        let result = Instance::parse(&domains, &[("Humidity", "High")]);
        assert!(matches!(result, Err(Id3Error::UnknownAttribute(name)) if name == "Humidity"));

        let result = Instance::parse(&domains, &[("Outlook", "Snow")]);
        assert!(matches!(result, Err(Id3Error::UnknownValue { .. })));
    }

    #[test]
    fn test_instance_from_assignments() {
        let instance = [Assignment::new(2, 0), Assignment::new(0, 1)]
            .into_iter()
            .collect::<Instance>();

        assert_eq!(instance, Instance::new().with(2, 0).with(0, 1));
        assert_eq!(instance.len(), 2);
    }

    #[test]
    fn test_instance_without() {
        let instance = Instance::new().with(0, 1).with(1, 0).with(2, 2);
        let reduced = instance.without(1);

        assert_eq!(reduced.len(), 2);
        assert_eq!(
            reduced.assignments(),
            &[Assignment::new(0, 1), Assignment::new(2, 2)]
        );
        assert_eq!(instance.len(), 3);
    }
}
