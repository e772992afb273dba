//! When steps for chat request parsing BDD scenarios.

use rstest_bdd_macros::when;

use super::world::{ParserWorld, run_async};

#[when(r#"the message "{message}" is parsed"#)]
fn the_message_is_parsed(world: &mut ParserWorld, message: String) {
    let parsed = run_async(world.parser.parse(world.session, &message));
    world.last_parsed = Some(parsed);
}
