//! Built-in namespaces seeded into the global frame: `console` and `Date`.

use std::rc::Rc;

use chrono::Utc;
use log::{debug, info};

use crate::callable::NativeFunction;
use crate::class::NativeModule;
use crate::environment::Environment;
use crate::interpreter::Interpreter;
use crate::value::Value;

/// Define every built-in module in `globals`.
pub fn install(globals: &mut Environment) {
    info!("Installing native modules");

    globals.define("console", console());
    globals.define("Date", date());
}

/// `console.log(value)`
pub fn console() -> Value {
    module(
        "console",
        vec![NativeFunction {
            name: "log",
            arity: 1,
            func: console_log,
        }],
    )
}

/// `Date.now()`
pub fn date() -> Value {
    module(
        "Date",
        vec![NativeFunction {
            name: "now",
            arity: 0,
            func: date_now,
        }],
    )
}

fn module(name: &'static str, functions: Vec<NativeFunction>) -> Value {
    let mut body = Environment::new();

    for function in functions {
        debug!("Defining native function '{}.{}'", name, function.name);
        body.define(function.name, Value::Native(Rc::new(function)));
    }

    Value::Module(Rc::new(NativeModule::new(name, body)))
}

fn console_log(interpreter: &mut Interpreter, arguments: &[Value]) -> Result<Value, String> {
    let text: String = arguments.first().map(Value::to_string).unwrap_or_default();

    interpreter
        .write_line(&text)
        .map_err(|e| format!("Could not write output: {}", e))?;

    Ok(Value::Null)
}

/// Unix time in seconds, rounded to hundredths.
fn date_now(_interpreter: &mut Interpreter, _arguments: &[Value]) -> Result<Value, String> {
    let seconds: f64 = Utc::now().timestamp_millis() as f64 / 1000.0;

    Ok(Value::Number((seconds * 100.0).round_ties_even() / 100.0))
}
