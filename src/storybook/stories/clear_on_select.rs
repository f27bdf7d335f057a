use color_eyre::eyre::Result;

use super::{builder, catalogue, AutocompleteStory};
use crate::storybook::{components::ActionLog, config::Config};

const DESCRIPTION: &str = "clearOnSelect empties the field as soon as a tag is picked, \
    ready for the next one. Picked tags pile up in the actions panel.";

pub fn story(config: &Config) -> Result<AutocompleteStory> {
    let actions = ActionLog::new(config.theme.footer());

    let autocomplete = builder(config, catalogue::tags(), &actions)
        .clear_on_select(true)
        .max_number_of_options(config.max_number_of_options)
        .attribute("id", "tags")
        .attribute("label", "Add a label")
        .attribute("placeholder", "bug, enhancement, …")
        .build()?;

    Ok(AutocompleteStory::new(
        "clear-on-select",
        "Clear on select",
        DESCRIPTION,
        autocomplete,
        actions,
    ))
}

#[cfg(test)]
mod tests {
    use tuggest::{autocomplete::Phase, events::Key};

    use super::*;
    use crate::storybook::story::Story;

    #[tokio::test]
    async fn test_field_is_empty_after_each_pick() {
        let mut story = story(&Config::default()).unwrap();
        story.set_visible().await.unwrap();

        for tag in ["bu", "secu"] {
            for c in tag.chars() {
                story.update(Key::Char(c)).await.unwrap();
            }
            story.update(Key::Down).await.unwrap();
            story.update(Key::Enter).await.unwrap();
            assert_eq!(story.autocomplete().input_value(), "");
            assert_eq!(story.autocomplete().state().phase, Phase::Closed);
        }

        let picked: Vec<_> = story
            .actions()
            .actions()
            .into_iter()
            .filter_map(|a| a.detail)
            .collect();
        assert_eq!(picked, vec!["security", "bug"]);
    }
}
