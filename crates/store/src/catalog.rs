//! Static catalog of advertising services.
//!
//! Reference data only: the catalog has no mutation operations. Filtering is
//! a category match (exact or the "all" wildcard) ANDed with a
//! case-insensitive substring search over title and description.

use serde::{Deserialize, Serialize};

use adstore_core::{Price, ServiceId};

/// Advertising category tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Search-engine contextual advertising.
    Contextual,
    /// Social network advertising.
    Social,
    /// Display (banner) advertising.
    Display,
    /// Video advertising.
    Video,
}

impl Category {
    /// Stable string id used in filters and URLs.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Contextual => "contextual",
            Self::Social => "social",
            Self::Display => "display",
            Self::Video => "video",
        }
    }

    /// Human-readable name shown in the category selector.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Contextual => "Контекстная реклама",
            Self::Social => "Соцсети",
            Self::Display => "Медийная реклама",
            Self::Video => "Видеореклама",
        }
    }

    /// All categories, in selector order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Contextual, Self::Social, Self::Display, Self::Video]
    }
}

/// Category predicate for catalog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Match every category (the "all" selector entry).
    #[default]
    All,
    /// Match one category exactly.
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter from its selector id ("all", "contextual", ...).
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        if id == "all" {
            return Some(Self::All);
        }
        Category::all()
            .into_iter()
            .find(|c| c.id() == id)
            .map(Self::Only)
    }

    fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

/// A purchasable advertising service (catalog entry).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Unique catalog id.
    pub id: ServiceId,
    /// Service title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Starting price.
    pub price: Price,
    /// Category tag.
    pub category: Category,
    /// Bullet-point feature list.
    pub features: Vec<String>,
    /// Popularity badge ("Популярно", "Хит продаж", ...), if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<String>,
}

/// The static service catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    /// Build the catalog with the standard service list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            services: default_services(),
        }
    }

    /// All services, unfiltered.
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Look up a service by id.
    #[must_use]
    pub fn get(&self, id: ServiceId) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Filter services by category and search text.
    ///
    /// Both predicates must hold: the category must match (or the filter is
    /// [`CategoryFilter::All`]), and the search text must appear
    /// case-insensitively in the title or description. An empty search
    /// matches everything.
    #[must_use]
    pub fn filter(&self, category: CategoryFilter, search: &str) -> Vec<&Service> {
        let needle = search.to_lowercase();
        self.services
            .iter()
            .filter(|s| category.matches(s.category))
            .filter(|s| {
                needle.is_empty()
                    || s.title.to_lowercase().contains(&needle)
                    || s.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn service(
    id: u32,
    title: &str,
    description: &str,
    price_rub: i64,
    category: Category,
    features: [&str; 3],
    popularity: Option<&str>,
) -> Service {
    Service {
        id: ServiceId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        price: Price::starting_at_rub(price_rub),
        category,
        features: features.iter().map(|&f| f.to_owned()).collect(),
        popularity: popularity.map(str::to_owned),
    }
}

fn default_services() -> Vec<Service> {
    vec![
        service(
            1,
            "Google Ads",
            "Контекстная реклама в поисковой системе Google",
            15_000,
            Category::Contextual,
            ["Настройка кампаний", "Подбор ключевых слов", "Аналитика"],
            Some("Популярно"),
        ),
        service(
            2,
            "Яндекс.Директ",
            "Реклама в поисковой системе Яндекс и РСЯ",
            12_000,
            Category::Contextual,
            ["Поиск и РСЯ", "Оптимизация", "Отчёты"],
            Some("Хит продаж"),
        ),
        service(
            3,
            "Facebook & Instagram",
            "Таргетированная реклама в социальных сетях Meta",
            20_000,
            Category::Social,
            ["Настройка аудиторий", "Креативы", "A/B тестирование"],
            None,
        ),
        service(
            4,
            "ВКонтакте Реклама",
            "Продвижение в крупнейшей социальной сети России",
            10_000,
            Category::Social,
            ["Таргетинг по интересам", "Ретаргетинг", "Сообщества"],
            None,
        ),
        service(
            5,
            "YouTube Ads",
            "Видеореклама на крупнейшей видеоплатформе",
            25_000,
            Category::Video,
            ["TrueView реклама", "Bumper ads", "Аналитика"],
            Some("Новинка"),
        ),
        service(
            6,
            "Медийная реклама",
            "Баннерная реклама на популярных сайтах",
            18_000,
            Category::Display,
            ["RTB закупки", "Ретаргетинг", "Креативы"],
            None,
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_empty_search_returns_everything() {
        let catalog = Catalog::new();
        let all = catalog.filter(CategoryFilter::All, "");
        assert_eq!(all.len(), catalog.services().len());
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn test_category_filter() {
        let catalog = Catalog::new();
        let social = catalog.filter(CategoryFilter::Only(Category::Social), "");
        assert_eq!(social.len(), 2);
        assert!(social.iter().all(|s| s.category == Category::Social));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let catalog = Catalog::new();

        // Title match, wrong case
        let by_title = catalog.filter(CategoryFilter::All, "google");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title.first().unwrap().id, ServiceId::new(1));

        // Description-only match
        let by_desc = catalog.filter(CategoryFilter::All, "баннерная");
        assert_eq!(by_desc.len(), 1);
        assert_eq!(by_desc.first().unwrap().id, ServiceId::new(6));
    }

    #[test]
    fn test_both_predicates_must_hold() {
        let catalog = Catalog::new();
        // "реклама" appears across categories; the category narrows it down
        let hits = catalog.filter(CategoryFilter::Only(Category::Video), "реклама");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().unwrap().id, ServiceId::new(5));

        // Search that matches nothing in the category
        let none = catalog.filter(CategoryFilter::Only(Category::Video), "google");
        assert!(none.is_empty());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("social"),
            Some(CategoryFilter::Only(Category::Social))
        );
        assert_eq!(CategoryFilter::parse("bogus"), None);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.get(ServiceId::new(2)).unwrap().title,
            "Яндекс.Директ"
        );
        assert!(catalog.get(ServiceId::new(99)).is_none());
    }
}
