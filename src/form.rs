/// Field values of a submitted form, in document order. Values are passed
/// through to the server unvalidated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> FormFields {
        FormFields::default()
    }

    pub fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.fields.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for FormFields
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (name, value) in iter {
            fields.push(name, value);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_document_order_and_repeats() {
        let fields: FormFields = [("notes", "shipped infra"), ("tag", "a"), ("tag", "b")]
            .into_iter()
            .collect();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get("tag"), Some("a"));
        assert_eq!(fields.get("missing"), None);
        assert_eq!(
            fields.iter().collect::<Vec<_>>(),
            [("notes", "shipped infra"), ("tag", "a"), ("tag", "b")]
        );
    }
}
