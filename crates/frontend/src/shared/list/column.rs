/// How a column renders its value
pub enum CellKind<E> {
    Text(fn(&E) -> String),
    /// Emphasised first column
    Strong(fn(&E) -> String),
    /// Pill with a modifier class (`badge--success`, ...)
    Badge(fn(&E) -> (String, &'static str)),
    /// Right-aligned numbers and amounts
    Number(fn(&E) -> String),
}

/// One column of an entity table
pub struct Column<E> {
    pub title: &'static str,
    pub min_width: f32,
    pub kind: CellKind<E>,
}

impl<E> Clone for Column<E> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            min_width: self.min_width,
            kind: self.kind,
        }
    }
}

impl<E> Clone for CellKind<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for CellKind<E> {}

impl<E> Column<E> {
    pub fn text(title: &'static str, value: fn(&E) -> String) -> Self {
        Self {
            title,
            min_width: 120.0,
            kind: CellKind::Text(value),
        }
    }

    pub fn strong(title: &'static str, value: fn(&E) -> String) -> Self {
        Self {
            title,
            min_width: 160.0,
            kind: CellKind::Strong(value),
        }
    }

    pub fn badge(title: &'static str, value: fn(&E) -> (String, &'static str)) -> Self {
        Self {
            title,
            min_width: 100.0,
            kind: CellKind::Badge(value),
        }
    }

    pub fn number(title: &'static str, value: fn(&E) -> String) -> Self {
        Self {
            title,
            min_width: 90.0,
            kind: CellKind::Number(value),
        }
    }

    pub fn width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }
}

/// Badge for an `active` flag
pub fn active_badge(active: bool) -> (String, &'static str) {
    if active {
        ("Activo".to_string(), "success")
    } else {
        ("Inactivo".to_string(), "neutral")
    }
}

/// Cell text for an optional value ("—" when missing)
pub fn or_dash(value: Option<impl ToString>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None::<String>), "—");
        assert_eq!(or_dash(Some("  ")), "—");
        assert_eq!(or_dash(Some(42)), "42");
    }

    #[test]
    fn test_active_badge() {
        assert_eq!(active_badge(true), ("Activo".to_string(), "success"));
        assert_eq!(active_badge(false).1, "neutral");
    }
}
