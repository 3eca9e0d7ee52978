use leptos::prelude::*;

/// Language the UI strings are looked up in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
}

pub fn provide_locale_context(locale: Locale) {
    provide_context(locale);
}

/// Falls back to English when nothing was provided.
pub fn use_locale() -> Locale {
    use_context::<Locale>().unwrap_or_default()
}

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        "all" => "All",
        "all_event_types_filter_label" => "All Event Types",
        "event_type" => "Event Type",
        "individual" => "Individual",
        "no_options_available" => "No options available",
        "number_selected_one" => "{{count}} selected",
        "number_selected_other" => "{{count}} selected",
        "search" => "Search",
        _ => return None,
    })
}

impl Locale {
    fn lookup(self, key: &str) -> Option<&'static str> {
        match self {
            Locale::English => english(key),
        }
    }

    pub fn t(self, key: &str) -> String {
        self.lookup(key)
            .map(str::to_string)
            .unwrap_or_else(|| {
                log::warn!("missing translation for {key}");
                key.to_string()
            })
    }

    /// Looks up `key` with the plural suffix for `count` (`_one` / `_other`) before falling back
    /// to the bare key, then interpolates `{{count}}`.
    pub fn t_count(self, key: &str, count: usize) -> String {
        let plural = if count == 1 { "one" } else { "other" };
        let template = self
            .lookup(&format!("{key}_{plural}"))
            .or_else(|| self.lookup(key));
        match template {
            Some(template) => template.replace("{{count}}", &count.to_string()),
            None => {
                log::warn!("missing translation for {key}");
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys() {
        assert_eq!(Locale::English.t("individual"), "Individual");
        assert_eq!(Locale::English.t("no_options_available"), "No options available");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(Locale::English.t("not_a_key"), "not_a_key");
        assert_eq!(Locale::English.t_count("not_a_key", 2), "not_a_key");
    }

    #[test]
    fn counts_are_interpolated() {
        assert_eq!(Locale::English.t_count("number_selected", 1), "1 selected");
        assert_eq!(Locale::English.t_count("number_selected", 12), "12 selected");
    }
}
