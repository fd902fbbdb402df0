// tests/control_flow.rs
use urscript_gen::{
    BlockKind, combine_conditions, end_block, open_block, popup, read_digital_input,
    set_analog_output, set_digital_output, sleep, text_message,
};

#[test]
fn io_commands_match_the_protocol_grammar() {
    assert_eq!(
        set_digital_output(3, true).as_str(),
        "set_digital_out(3,True)\n"
    );
    assert_eq!(
        set_digital_output(3, false).as_str(),
        "set_digital_out(3,False)\n"
    );
    assert_eq!(
        read_digital_input(7).as_str(),
        "get_standard_digital_in(7)\n"
    );
    assert_eq!(
        set_analog_output(1, 0.5).as_str(),
        "set_standard_analog_out(1,0.5)\n"
    );
}

#[test]
fn messages_and_pauses_render_one_line_each() {
    assert_eq!(
        popup("tool change", "operator").as_str(),
        "popup(\"tool change\",\"operator\")\n"
    );
    assert_eq!(
        text_message("station", "ready").as_str(),
        "textmsg(\"station\",\"ready\")\n"
    );
    assert_eq!(sleep(0.5).as_str(), "sleep(0.5)\n");
}

#[test]
fn combine_conditions_strips_newlines_and_joins_with_and() {
    let combined = combine_conditions(
        read_digital_input(0).as_str(),
        read_digital_input(1).as_str(),
    );

    assert_eq!(
        combined,
        "get_standard_digital_in(0)and get_standard_digital_in(1)"
    );
}

#[test]
fn open_block_wraps_a_condition_for_each_keyword() {
    let condition = read_digital_input(0);

    assert_eq!(
        open_block(BlockKind::If, condition.as_str(), true).as_str(),
        "if get_standard_digital_in(0) == True:\n"
    );
    assert_eq!(
        open_block(BlockKind::While, condition.as_str(), true).as_str(),
        "while get_standard_digital_in(0) == True:\n"
    );
    assert_eq!(
        open_block(BlockKind::Elif, condition.as_str(), false).as_str(),
        "elif get_standard_digital_in(0) == False:\n"
    );
}

#[test]
fn combined_conditions_nest_inside_blocks() {
    let combined = combine_conditions(
        read_digital_input(0).as_str(),
        read_digital_input(1).as_str(),
    );
    let block = open_block(BlockKind::While, &combined, true);

    assert_eq!(
        block.as_str(),
        "while get_standard_digital_in(0)and get_standard_digital_in(1) == True:\n"
    );
    assert_eq!(end_block().as_str(), "end\n");
}

#[test]
fn builders_are_pure() {
    assert_eq!(sleep(1.25), sleep(1.25));
    assert_eq!(read_digital_input(4), read_digital_input(4));
    assert_eq!(
        popup("a", "b").into_string(),
        popup("a", "b").into_string()
    );
}
