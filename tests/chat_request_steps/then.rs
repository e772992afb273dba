//! Then steps for chat request parsing BDD scenarios.

use aalto::chat_request::domain::{ParsedChatRequest, Segment};
use rstest_bdd_macros::then;

use super::world::{ParserWorld, reference_payload};

fn last_parsed(world: &ParserWorld) -> Result<&ParsedChatRequest, eyre::Report> {
    world
        .last_parsed
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no message has been parsed in this scenario"))
}

#[then(r#"the agent segment resolves to "{name}""#)]
fn agent_segment_resolves(world: &ParserWorld, name: String) -> Result<(), eyre::Report> {
    let parsed = last_parsed(world)?;
    let mention = parsed
        .agent()
        .ok_or_else(|| eyre::eyre!("expected an agent segment"))?;
    if mention.agent.name.as_str() != name {
        return Err(eyre::eyre!(
            "expected agent '{name}', found '{}'",
            mention.agent.name
        ));
    }
    Ok(())
}

#[then(r#"the sub-command segment resolves to "{name}""#)]
fn sub_command_segment_resolves(world: &ParserWorld, name: String) -> Result<(), eyre::Report> {
    let parsed = last_parsed(world)?;
    let sub = parsed
        .sub_command()
        .ok_or_else(|| eyre::eyre!("expected a sub-command segment"))?;
    if sub.sub_command.name != name {
        return Err(eyre::eyre!(
            "expected sub-command '{name}', found '{}'",
            sub.sub_command.name
        ));
    }
    Ok(())
}

#[then(r#"the slash-command segment resolves to "{name}""#)]
fn slash_command_segment_resolves(world: &ParserWorld, name: String) -> Result<(), eyre::Report> {
    let parsed = last_parsed(world)?;
    let command = parsed
        .slash_command()
        .ok_or_else(|| eyre::eyre!("expected a slash-command segment"))?;
    if command.command.command != name {
        return Err(eyre::eyre!(
            "expected command '{name}', found '{}'",
            command.command.command
        ));
    }
    Ok(())
}

#[then(r#"a variable segment named "{name}" carries the argument {argument:u64}"#)]
fn variable_segment_carries_argument(
    world: &ParserWorld,
    name: String,
    argument: u64,
) -> Result<(), eyre::Report> {
    let parsed = last_parsed(world)?;
    let variables = parsed.variables();
    let variable = variables
        .iter()
        .find(|v| v.name == name)
        .ok_or_else(|| eyre::eyre!("expected a variable segment named '{name}'"))?;
    if variable.argument != Some(argument) {
        return Err(eyre::eyre!(
            "expected argument {argument}, found {:?}",
            variable.argument
        ));
    }
    Ok(())
}

#[then("a dynamic-reference segment carries the registered payload")]
fn dynamic_reference_carries_payload(world: &ParserWorld) -> Result<(), eyre::Report> {
    let parsed = last_parsed(world)?;
    let references = parsed.dynamic_references();
    let reference = references
        .first()
        .ok_or_else(|| eyre::eyre!("expected a dynamic-reference segment"))?;
    if reference.data != reference_payload() {
        return Err(eyre::eyre!("unexpected payload: {:?}", reference.data));
    }
    Ok(())
}

#[then("the segments reassemble the original message")]
fn segments_reassemble_the_message(world: &ParserWorld) -> Result<(), eyre::Report> {
    let parsed = last_parsed(world)?;
    let rebuilt: String = parsed
        .segments()
        .iter()
        .map(|segment| parsed.segment_text(segment))
        .collect();
    if rebuilt != parsed.text() {
        return Err(eyre::eyre!(
            "expected segments to cover {:?}, rebuilt {rebuilt:?}",
            parsed.text()
        ));
    }
    Ok(())
}

#[then("the message is a single text segment")]
fn message_is_a_single_text_segment(world: &ParserWorld) -> Result<(), eyre::Report> {
    let parsed = last_parsed(world)?;
    match parsed.segments() {
        [Segment::Text(_)] => Ok(()),
        other => Err(eyre::eyre!("expected one text segment, found {other:?}")),
    }
}
