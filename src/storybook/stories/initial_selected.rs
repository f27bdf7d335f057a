use color_eyre::eyre::Result;

use super::{builder, catalogue, AutocompleteStory};
use crate::storybook::{components::ActionLog, config::Config};

const DESCRIPTION: &str = "initialSelectedItem starts the component with Mango already \
    chosen. Clear it with C-u to start again.";

pub fn story(config: &Config) -> Result<AutocompleteStory> {
    let actions = ActionLog::new(config.theme.footer());

    let autocomplete = builder(config, catalogue::fruit(), &actions)
        .on_clear(actions.bare_recorder("onClear"))
        .initial_selected_item("Mango")
        .max_number_of_options(config.max_number_of_options)
        .attribute("id", "favourite")
        .attribute("label", "Favourite fruit")
        .build()?;

    Ok(AutocompleteStory::new(
        "initial-selected",
        "Initial selection",
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
    async fn test_starts_selected_and_clears() {
        let mut story = story(&Config::default()).unwrap();
        assert_eq!(story.autocomplete().selected_item(), Some("Mango"));
        assert_eq!(story.autocomplete().input_value(), "Mango");

        story.set_visible().await.unwrap();
        story.update(Key::Ctrl('u')).await.unwrap();
        assert_eq!(story.autocomplete().selected_item(), None);
        assert_eq!(story.autocomplete().input_value(), "");
        assert_eq!(story.actions().actions()[0].name, "onClear");
    }
}
