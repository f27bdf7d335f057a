use color_eyre::eyre::Result;

use super::{builder, catalogue, AutocompleteStory};
use crate::storybook::{components::ActionLog, config::Config};

const DESCRIPTION: &str = "defaultInputValue seeds the field with text. The list stays \
    closed until you press ↓ or keep typing.";

pub fn story(config: &Config) -> Result<AutocompleteStory> {
    let actions = ActionLog::new(config.theme.footer());

    let autocomplete = builder(config, catalogue::fruit(), &actions)
        .on_input_value_change(actions.recorder("onInputValueChange"))
        .default_input_value("berry")
        .max_number_of_options(config.max_number_of_options)
        .attribute("id", "berries")
        .attribute("label", "Berries")
        .build()?;

    Ok(AutocompleteStory::new(
        "default-input",
        "Default input",
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
    async fn test_down_opens_on_seeded_text() {
        let mut story = story(&Config::default()).unwrap();
        assert_eq!(story.autocomplete().input_value(), "berry");
        assert_eq!(story.autocomplete().state().phase, Phase::Closed);

        story.set_visible().await.unwrap();
        story.update(Key::Down).await.unwrap();

        let keys: Vec<_> = story
            .autocomplete()
            .rendered_suggestions()
            .into_iter()
            .map(|s| s.key)
            .collect();
        assert_eq!(keys, vec!["Blackberry", "Blueberry", "Cranberry"]);
    }
}
