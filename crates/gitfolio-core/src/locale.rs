use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for dates, compact numbers and every user-facing string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::PtBr => ',',
            Locale::EnUs => '.',
        }
    }

    pub fn loading(&self) -> &'static str {
        match self {
            Locale::PtBr => "Carregando repositórios...",
            Locale::EnUs => "Loading repositories...",
        }
    }

    pub fn no_results(&self) -> &'static str {
        match self {
            Locale::PtBr => "Nenhum repositório encontrado.",
            Locale::EnUs => "No repositories found.",
        }
    }

    pub fn showing(&self, shown: usize, total: usize) -> String {
        match self {
            Locale::PtBr => format!("Mostrando {} de {}.", shown, total),
            Locale::EnUs => format!("Showing {} of {}.", shown, total),
        }
    }

    pub fn load_failed(&self) -> &'static str {
        match self {
            Locale::PtBr => {
                "Não foi possível carregar os repositórios agora. Confira direto no GitHub."
            }
            Locale::EnUs => "Could not load repositories right now. Check GitHub directly.",
        }
    }

    pub fn no_description(&self) -> &'static str {
        match self {
            Locale::PtBr => "Sem descrição.",
            Locale::EnUs => "No description.",
        }
    }

    pub fn updated(&self, date: &str) -> String {
        match self {
            Locale::PtBr => format!("Atualizado em {}", date),
            Locale::EnUs => format!("Updated {}", date),
        }
    }

    pub fn open_label(&self) -> &'static str {
        match self {
            Locale::PtBr => "Abrir",
            Locale::EnUs => "Open",
        }
    }

    pub fn code_label(&self) -> &'static str {
        match self {
            Locale::PtBr => "Código",
            Locale::EnUs => "Code",
        }
    }

    pub fn load_more_label(&self) -> &'static str {
        match self {
            Locale::PtBr => "Carregar mais",
            Locale::EnUs => "Load more",
        }
    }

    pub fn search_placeholder(&self) -> &'static str {
        match self {
            Locale::PtBr => "Buscar por nome, linguagem ou tópico",
            Locale::EnUs => "Search by name, language or topic",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            other => Err(format!("unsupported locale '{}' (expected pt-BR or en-US)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale() {
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("en_us".parse::<Locale>(), Ok(Locale::EnUs));
        assert_eq!("en".parse::<Locale>(), Ok(Locale::EnUs));
        assert!("fr-FR".parse::<Locale>().is_err());
    }

    #[test]
    fn test_showing_message() {
        assert_eq!(Locale::PtBr.showing(9, 20), "Mostrando 9 de 20.");
        assert_eq!(Locale::EnUs.showing(18, 20), "Showing 18 of 20.");
    }
}
