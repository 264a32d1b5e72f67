/// Сортировка строк таблицы на клиенте
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку по колонке
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю (стабильно)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive comparison for text columns
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Числа с плавающей точкой: NaN считается равным всему
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Next (field, ascending) after a click on `field`'s header.
pub fn toggle_sort(current_field: &str, ascending: bool, field: &str) -> (String, bool) {
    if current_field == field {
        (field.to_string(), !ascending)
    } else {
        (field.to_string(), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, f64);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => compare_text(self.0, other.0),
                "price" => compare_f64(self.1, other.1),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("beta", 2.0), Row("Alpha", 3.0), Row("gamma", 1.0)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0], Row("Alpha", 3.0));

        sort_list(&mut rows, "price", false);
        assert_eq!(rows.iter().map(|r| r.1).collect::<Vec<_>>(), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_toggle_sort() {
        assert_eq!(toggle_sort("name", true, "name"), ("name".to_string(), false));
        assert_eq!(toggle_sort("name", false, "price"), ("price".to_string(), true));
        assert_eq!(get_sort_indicator("name", "price", true), " ⇅");
    }
}
