//! Optional query filters for `GET /boletos`.

use serde_json::Value;

use crate::error::ValidationError;

/// Filter keys the listing endpoint accepts. Anything else is dropped.
pub const ALLOWED_FILTERS: [&str; 17] = [
    "contaCaucao",
    "carteiraConvenio",
    "variacaoCarteiraConvenio",
    "modalidadeCobranca",
    "cnpjPagador",
    "digitoCNPJPagador",
    "cpfPagador",
    "digitoCPFPagador",
    "dataInicioVencimento",
    "dataFimVencimento",
    "dataInicioRegistro",
    "dataFimRegistro",
    "dataInicioMovimento",
    "dataFimMovimento",
    "codigoEstadoTituloCobranca",
    "boletoVencido",
    "indice",
];

/// Caller-supplied listing filters, kept in insertion order.
///
/// Any key can be inserted; only keys in [`ALLOWED_FILTERS`] reach the
/// request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilters {
    entries: Vec<(String, String)>,
}

impl ListingFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_allowed(key: &str) -> bool {
        ALLOWED_FILTERS.contains(&key)
    }

    /// Set `key`. Re-inserting a key replaces its value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Allow-listed entries, in insertion order.
    pub fn allowed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(k, _)| Self::is_allowed(k))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build from a JSON object. Strings are used as-is, other scalars are
    /// rendered as JSON text; `null` entries are skipped.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or_else(|| {
            ValidationError::MalformedPayload("listing filters must be a JSON object".to_string())
        })?;

        let mut filters = Self::new();
        for (key, value) in object {
            match value {
                Value::Null => {}
                Value::String(s) => filters.insert(key.as_str(), s),
                other => filters.insert(key.as_str(), other),
            }
        }
        Ok(filters)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for ListingFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Self::new();
        for (k, v) in iter {
            filters.insert(k, v);
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_keys_are_dropped() {
        let filters = ListingFilters::new()
            .with("contaCaucao", 1)
            .with("bogusKey", 2);
        assert_eq!(filters.len(), 2);
        let allowed: Vec<_> = filters.allowed().collect();
        assert_eq!(allowed, vec![("contaCaucao", "1")]);
    }

    #[test]
    fn test_insertion_order_and_replacement() {
        let mut filters: ListingFilters = vec![
            ("dataFimRegistro", "31.03.2026"),
            ("dataInicioRegistro", "01.03.2026"),
        ]
        .into_iter()
        .collect();
        filters.insert("dataFimRegistro", "30.03.2026");

        let allowed: Vec<_> = filters.allowed().collect();
        assert_eq!(
            allowed,
            vec![
                ("dataFimRegistro", "30.03.2026"),
                ("dataInicioRegistro", "01.03.2026"),
            ]
        );
    }

    #[test]
    fn test_from_json() {
        let filters = ListingFilters::from_json(&json!({
            "boletoVencido": "S",
            "indice": 300,
            "cpfPagador": null
        }))
        .unwrap();
        assert_eq!(filters.len(), 2);
        assert!(filters.allowed().any(|(k, v)| k == "indice" && v == "300"));
        assert!(filters.allowed().any(|(k, v)| k == "boletoVencido" && v == "S"));

        assert!(ListingFilters::from_json(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_from_json_keeps_document_order() {
        let value: Value =
            serde_json::from_str(r#"{"indice":300,"boletoVencido":"S","contaCaucao":1}"#).unwrap();
        let filters = ListingFilters::from_json(&value).unwrap();

        let keys: Vec<&str> = filters.allowed().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["indice", "boletoVencido", "contaCaucao"]);
    }
}
