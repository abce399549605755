use crate::excel::{Column, ColumnType, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub header: String,
    pub column_type: ColumnType,
    pub non_null: usize,
    pub null: usize,
    pub samples: Vec<Value>,
}

impl ColumnStats {
    pub fn compute(column: &Column, sample_limit: usize) -> Self {
        let non_null = column.non_null().count();

        Self {
            header: column.header.clone(),
            column_type: column.column_type,
            non_null,
            null: column.values.len() - non_null,
            samples: column.non_null().take(sample_limit).cloned().collect(),
        }
    }

    /// Samples as a list literal, e.g. `["Widget", "Gadget"]`.
    pub fn samples_literal(&self) -> String {
        let items: Vec<String> = self.samples.iter().map(Value::literal).collect();
        format!("[{}]", items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::CellType;

    fn text(s: &str) -> Option<Value> {
        Some(Value::Text(s.to_string()))
    }

    #[test]
    fn counts_add_up_to_row_count() {
        let column = Column::new(
            "Price".to_string(),
            vec![Some(Value::Float(9.5)), None, Some(Value::Int(3))],
        );

        let stats = ColumnStats::compute(&column, 3);

        assert_eq!(stats.non_null, 2);
        assert_eq!(stats.null, 1);
        assert_eq!(stats.non_null + stats.null, column.values.len());
        assert_eq!(stats.column_type, ColumnType::Uniform(CellType::Float));
        assert_eq!(stats.samples, vec![Value::Float(9.5), Value::Float(3.0)]);
        assert_eq!(stats.samples_literal(), "[9.5, 3.0]");
    }

    #[test]
    fn samples_are_the_first_non_null_values_in_row_order() {
        let column = Column::new(
            "Name".to_string(),
            vec![None, text("a"), None, text("b"), text("c"), text("d")],
        );

        let stats = ColumnStats::compute(&column, 3);

        assert_eq!(stats.samples_literal(), r#"["a", "b", "c"]"#);
    }

    #[test]
    fn all_null_column_has_no_samples() {
        let column = Column::new("Notes".to_string(), vec![None, None]);

        let stats = ColumnStats::compute(&column, 3);

        assert_eq!(stats.non_null, 0);
        assert_eq!(stats.null, 2);
        assert_eq!(stats.column_type, ColumnType::Empty);
        assert_eq!(stats.samples_literal(), "[]");
    }

    #[test]
    fn sample_limit_is_respected() {
        let column = Column::new("Qty".to_string(), (1..=10).map(|i| Some(Value::Int(i))).collect());

        assert_eq!(ColumnStats::compute(&column, 0).samples.len(), 0);
        assert_eq!(ColumnStats::compute(&column, 5).samples.len(), 5);
    }
}
