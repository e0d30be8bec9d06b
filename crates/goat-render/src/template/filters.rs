//! MiniJinja filter registration.

use minijinja::{Environment, Value};

/// Registers goat's filters on a minijinja environment.
///
/// Everything else (`safe`, `escape`, `join`, `upper`, ...) comes from
/// minijinja's builtins.
pub fn register_filters(env: &mut Environment<'static>) {
    // Filter to append a newline to the value, enabling explicit line break control.
    // Usage: {{ content | nl }} outputs content followed by \n
    //        {{ "" | nl }} outputs just \n (a blank line)
    // A value marked safe stays safe, so html mode does not escape it again.
    env.add_filter("nl", |value: Value| -> Value {
        let line = format!("{}\n", value);
        if value.is_safe() {
            Value::from_safe_string(line)
        } else {
            Value::from(line)
        }
    });
}
