use color_eyre::eyre::Result;

use super::{builder, catalogue, AutocompleteStory};
use crate::storybook::{components::ActionLog, config::Config};

const DESCRIPTION: &str = "Type two or more letters to filter the fruit bowl. \
    Every keystroke is reported through onInputValueChange; clearing is enabled \
    because onClear is set.";

pub fn story(config: &Config) -> Result<AutocompleteStory> {
    let actions = ActionLog::new(config.theme.footer());
    let options = config.options.clone().unwrap_or_else(catalogue::fruit);

    let autocomplete = builder(config, options, &actions)
        .on_input_value_change(actions.recorder("onInputValueChange"))
        .on_clear(actions.bare_recorder("onClear"))
        .max_number_of_options(config.max_number_of_options)
        .clear_on_select(config.clear_on_select)
        .attribute("id", "fruit")
        .attribute("label", "Fruit")
        .attribute("placeholder", "Start typing a fruit…")
        .build()?;

    Ok(AutocompleteStory::new(
        "basic",
        "Basic",
        DESCRIPTION,
        autocomplete,
        actions,
    ))
}
