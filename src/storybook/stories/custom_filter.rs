use color_eyre::eyre::Result;
use tuggest::autocomplete::prefix_filter;

use super::{builder, catalogue, AutocompleteStory};
use crate::storybook::{components::ActionLog, config::Config};

const DESCRIPTION: &str = "filterOptions swaps the matching strategy. These commands only \
    match from the start of the word, case sensitive, like a shell would complete them.";

pub fn story(config: &Config) -> Result<AutocompleteStory> {
    let actions = ActionLog::new(config.theme.footer());

    let autocomplete = builder(config, catalogue::commands(), &actions)
        .filter_options(prefix_filter)
        .clear_on_select(true)
        .max_number_of_options(config.max_number_of_options)
        .attribute("id", "command")
        .attribute("label", "Command")
        .attribute("placeholder", "containers, images, …")
        .build()?;

    Ok(AutocompleteStory::new(
        "custom-filter",
        "Custom filter",
        DESCRIPTION,
        autocomplete,
        actions,
    ))
}

#[cfg(test)]
mod tests {
    use tuggest::events::Key;

    use super::*;
    use crate::storybook::story::Story;

    #[tokio::test]
    async fn test_only_prefixes_match() {
        let mut story = story(&Config::default()).unwrap();
        story.set_visible().await.unwrap();
        for c in "vo".chars() {
            story.update(Key::Char(c)).await.unwrap();
        }

        let keys: Vec<_> = story
            .autocomplete()
            .visible_options()
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(keys, vec!["volume", "volumes"]);
    }

    #[tokio::test]
    async fn test_substrings_do_not_match() {
        let mut story = story(&Config::default()).unwrap();
        story.set_visible().await.unwrap();
        for c in "age".chars() {
            story.update(Key::Char(c)).await.unwrap();
        }
        assert!(story.autocomplete().visible_options().is_empty());
    }
}
