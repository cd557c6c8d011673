use std::fmt;

/// Tamanho máximo (em caracteres) do nome de um território
pub const MAX_NAME_CHARS: usize = 63;
/// Tamanho máximo (em caracteres) da cor de um território
pub const MAX_COLOR_CHARS: usize = 31;
/// Limite histórico de territórios cadastrados
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    pub id: u32,
    pub name: String,
    pub area: i32,
    pub color: String,
}

impl Territory {
    pub fn new(id: u32, new: NewTerritory) -> Self {
        Self {
            id,
            name: truncate_chars(&new.name, MAX_NAME_CHARS),
            area: new.area,
            color: truncate_chars(&new.color, MAX_COLOR_CHARS),
        }
    }

    /// Aplica somente os campos presentes em `update`.
    pub fn apply(&mut self, update: TerritoryUpdate) {
        if let Some(name) = update.name {
            self.name = truncate_chars(&name, MAX_NAME_CHARS);
        }
        if let Some(area) = update.area {
            self.area = area;
        }
        if let Some(color) = update.color {
            self.color = truncate_chars(&color, MAX_COLOR_CHARS);
        }
    }

    /// Comparação de nome ignorando maiúsculas/minúsculas (ASCII).
    /// A consulta é cortada no mesmo limite do nome armazenado.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(&truncate_chars(query, MAX_NAME_CHARS))
    }
}

impl fmt::Display for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Name: {} | Area: {} | Color: {}",
            self.id, self.name, self.area, self.color
        )
    }
}

/// Dados de um território ainda sem id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTerritory {
    pub name: String,
    pub area: i32,
    pub color: String,
}

impl NewTerritory {
    pub fn new(name: impl Into<String>, area: i32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            area,
            color: color.into(),
        }
    }
}

/// Campos a substituir numa edição; `None` mantém o valor atual.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerritoryUpdate {
    pub name: Option<String>,
    pub area: Option<i32>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let t = Territory::new(7, NewTerritory::new("Red Zone", -5, "red"));
        assert_eq!(t.to_string(), "[7] Name: Red Zone | Area: -5 | Color: red");
    }

    #[test]
    fn test_new_truncates_long_fields() {
        let long_name = "n".repeat(100);
        let long_color = "c".repeat(40);
        let t = Territory::new(1, NewTerritory::new(long_name, 0, long_color));

        assert_eq!(t.name.chars().count(), MAX_NAME_CHARS);
        assert_eq!(t.color.chars().count(), MAX_COLOR_CHARS);
    }

    #[test]
    fn test_truncation_counts_characters() {
        let name = "é".repeat(70);
        let t = Territory::new(1, NewTerritory::new(name, 0, ""));
        assert_eq!(t.name, "é".repeat(MAX_NAME_CHARS));
    }

    #[test]
    fn test_apply_partial_update() {
        let mut t = Territory::new(2, NewTerritory::new("Blue Zone", 80, "blue"));
        t.apply(TerritoryUpdate {
            area: Some(200),
            ..Default::default()
        });

        assert_eq!(t.name, "Blue Zone");
        assert_eq!(t.area, 200);
        assert_eq!(t.color, "blue");
        assert_eq!(t.id, 2);
    }

    #[test]
    fn test_matches_name_is_case_insensitive_and_exact() {
        let t = Territory::new(1, NewTerritory::new("Alpha", 0, ""));
        assert!(t.matches_name("alpha"));
        assert!(t.matches_name("ALPHA"));
        assert!(!t.matches_name("Alph"));
        assert!(!t.matches_name("Alphas"));
    }

    #[test]
    fn test_apply_truncates_replacements() {
        let mut t = Territory::new(1, NewTerritory::new("Zone", 0, "red"));
        t.apply(TerritoryUpdate {
            name: Some("n".repeat(70)),
            area: None,
            color: Some("c".repeat(40)),
        });

        assert_eq!(t.name, "n".repeat(MAX_NAME_CHARS));
        assert_eq!(t.color, "c".repeat(MAX_COLOR_CHARS));
        assert_eq!(t.area, 0);
    }

    #[test]
    fn test_matches_name_with_overlong_query() {
        let long = "Long".repeat(20);
        let t = Territory::new(1, NewTerritory::new(long.clone(), 0, ""));

        assert!(t.matches_name(&long));
        assert!(t.matches_name(&long.to_uppercase()));
        assert!(!t.matches_name(&long[..40]));
    }
}
