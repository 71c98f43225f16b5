use serde::ser::{Serialize, SerializeMap, Serializer};
use url::Url;

use crate::error::ConfigError;
use crate::models::film::Film;

/// 从导演列表页链接中提取导演标识（路径的最后一个非空段）
///
/// `https://letterboxd.com/director/ingmar-bergman/` → `ingmar-bergman`
pub fn director_key(url: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidDirectorUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(|| ConfigError::InvalidDirectorUrl {
            url: url.to_string(),
            reason: "链接中没有路径段".to_string(),
        })
}

/// 按导演汇总的作品列表
///
/// 导演按首次登记的顺序输出；每个导演的作品按完成顺序追加
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorFilmography {
    entries: Vec<(String, Vec<Film>)>,
}

impl DirectorFilmography {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记导演，已存在时保持原有列表不变
    pub fn register(&mut self, director: &str) -> &mut Vec<Film> {
        let index = match self.entries.iter().position(|(key, _)| key == director) {
            Some(index) => index,
            None => {
                self.entries.push((director.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn push(&mut self, director: &str, film: Film) {
        self.register(director).push(film);
    }

    pub fn get(&self, director: &str) -> Option<&[Film]> {
        self.entries
            .iter()
            .find(|(key, _)| key == director)
            .map(|(_, films)| films.as_slice())
    }

    pub fn directors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn film_count(&self) -> usize {
        self.entries.iter().map(|(_, films)| films.len()).sum()
    }
}

impl Serialize for DirectorFilmography {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (director, films) in &self.entries {
            map.serialize_entry(director, films)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_director_key_with_trailing_slash() {
        let key = director_key("https://letterboxd.com/director/ingmar-bergman/").unwrap();
        assert_eq!(key, "ingmar-bergman");
    }

    #[test]
    fn test_director_key_without_trailing_slash() {
        let key = director_key("https://letterboxd.com/director/agnes-varda").unwrap();
        assert_eq!(key, "agnes-varda");
    }

    #[test]
    fn test_director_key_rejects_root_url() {
        assert!(director_key("https://letterboxd.com/").is_err());
        assert!(director_key("letterboxd").is_err());
    }

    #[test]
    fn test_register_keeps_empty_list() {
        let mut results = DirectorFilmography::new();
        results.register("ingmar-bergman");
        assert_eq!(results.get("ingmar-bergman"), Some(&[][..]));
        assert_eq!(results.film_count(), 0);
    }

    #[test]
    fn test_register_twice_keeps_films() {
        let mut results = DirectorFilmography::new();
        results.push("ingmar-bergman", Film::new("Persona", "1966", None));
        results.register("ingmar-bergman");
        assert_eq!(results.len(), 1);
        assert_eq!(results.film_count(), 1);
    }

    #[test]
    fn test_serialize_keeps_registration_order() {
        let mut results = DirectorFilmography::new();
        results.register("yasujiro-ozu");
        results.push("agnes-varda", Film::new("Cléo from 5 to 7", "1962", Some("Cléo de 5 à 7".to_string())));

        let text = serde_json::to_string(&results).unwrap();
        let ozu = text.find("yasujiro-ozu").unwrap();
        let varda = text.find("agnes-varda").unwrap();
        assert!(ozu < varda);
        assert!(text.starts_with(r#"{"yasujiro-ozu":[]"#));
    }
}
