use sovran_variant::{variant, Handler};

variant! {
    /// A single configuration entry: number, text, or flag.
    #[derive(Debug, Clone)]
    pub enum ConfigValue {
        Number(i64),
        Text(String),
        Flag(bool),
    }
}

/// Renders any config value for display, one operation per member type.
struct Render;

impl<'a> Handler<&'a i64> for Render {
    type Output = String;
    fn handle(&mut self, value: &'a i64) -> String {
        format!("{} (number)", value)
    }
}

impl<'a> Handler<&'a String> for Render {
    type Output = String;
    fn handle(&mut self, value: &'a String) -> String {
        format!("{:?} (text)", value)
    }
}

impl<'a> Handler<&'a bool> for Render {
    type Output = String;
    fn handle(&mut self, value: &'a bool) -> String {
        format!("{} (flag)", if *value { "enabled" } else { "disabled" })
    }
}

fn main() {
    // Construct with a value; a config entry is never empty.
    let mut port = ConfigValue::new(8080i64);
    let mut verbose = ConfigValue::new(false);
    let mut greeting = ConfigValue::new(String::from("Hello World"));

    // Identify and read values without any error handling; a wrong-type
    // query is a miss, not a failure.
    if port.is_type::<i64>() {
        println!("port is numeric: {:?}", port.peek::<i64>());
    }
    println!("port as text: {:?}", port.peek::<String>());

    // Render everything through one handler.
    println!("port     = {}", port.visit(Render));
    println!("verbose  = {}", verbose.visit(Render));
    println!("greeting = {}", greeting.visit(Render));

    // Reassignment may change the member type; assignments chain.
    port.assign(String::from("default"));
    verbose.assign(true);
    greeting.assign(0i64).assign(String::from("Goodbye"));

    println!("--- after reassignment ---");
    println!("port     = {}", port.visit(Render));
    println!("verbose  = {}", verbose.visit(Render));
    println!("greeting = {}", greeting.visit(Render));
}
