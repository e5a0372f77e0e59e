use sovran_variant::{variant, Handler};

variant! {
    #[derive(Debug, Clone, PartialEq)]
    enum Scalar {
        Byte(u8),
        Letter(char),
        Text(String),
        Flag(bool),
    }
}

/// Renders the active member as "kind value", one operation per member.
struct ToStringHandler;

impl<'a> Handler<&'a u8> for ToStringHandler {
    type Output = String;
    fn handle(&mut self, value: &'a u8) -> String {
        format!("byte {}", value)
    }
}

impl<'a> Handler<&'a char> for ToStringHandler {
    type Output = String;
    fn handle(&mut self, value: &'a char) -> String {
        format!("char {}", value)
    }
}

impl<'a> Handler<&'a String> for ToStringHandler {
    type Output = String;
    fn handle(&mut self, value: &'a String) -> String {
        format!("string {}", value)
    }
}

impl<'a> Handler<&'a bool> for ToStringHandler {
    type Output = String;
    fn handle(&mut self, value: &'a bool) -> String {
        format!("bool {}", value)
    }
}

#[test]
fn test_visit_follows_reassignment() {
    let mut scalar = Scalar::new(42u8);
    assert_eq!(scalar.visit(ToStringHandler), "byte 42");

    scalar.assign(true);
    assert_eq!(scalar.visit(ToStringHandler), "bool true");

    scalar.assign(String::from("Hello World"));
    assert_eq!(scalar.visit(ToStringHandler), "string Hello World");

    scalar.assign('x');
    assert_eq!(scalar.visit(ToStringHandler), "char x");
}

/// Counts invocations and reports a per-member summary value.
#[derive(Default)]
struct CountingHandler {
    calls: u32,
}

impl<'a> Handler<&'a u8> for CountingHandler {
    type Output = u32;
    fn handle(&mut self, value: &'a u8) -> u32 {
        self.calls += 1;
        u32::from(*value)
    }
}

impl<'a> Handler<&'a char> for CountingHandler {
    type Output = u32;
    fn handle(&mut self, value: &'a char) -> u32 {
        self.calls += 1;
        *value as u32
    }
}

impl<'a> Handler<&'a String> for CountingHandler {
    type Output = u32;
    fn handle(&mut self, value: &'a String) -> u32 {
        self.calls += 1;
        value.len() as u32
    }
}

impl<'a> Handler<&'a bool> for CountingHandler {
    type Output = u32;
    fn handle(&mut self, value: &'a bool) -> u32 {
        self.calls += 1;
        u32::from(*value)
    }
}

#[test]
fn test_visit_invokes_exactly_one_operation_exactly_once() {
    let scalar = Scalar::new(42u8);
    let mut handler = CountingHandler::default();

    let result = scalar.visit(&mut handler);

    assert_eq!(result, 42);
    assert_eq!(handler.calls, 1);
}

#[test]
fn test_visit_result_is_propagated_unchanged() {
    let mut handler = CountingHandler::default();

    assert_eq!(Scalar::new(String::from("abcde")).visit(&mut handler), 5);
    assert_eq!(Scalar::new(true).visit(&mut handler), 1);
    assert_eq!(handler.calls, 2);
}

/// Doubles numeric members in place, leaves the rest alone.
struct DoubleInPlace;

impl<'a> Handler<&'a mut u8> for DoubleInPlace {
    type Output = ();
    fn handle(&mut self, value: &'a mut u8) {
        *value *= 2;
    }
}

impl<'a> Handler<&'a mut char> for DoubleInPlace {
    type Output = ();
    fn handle(&mut self, _value: &'a mut char) {}
}

impl<'a> Handler<&'a mut String> for DoubleInPlace {
    type Output = ();
    fn handle(&mut self, value: &'a mut String) {
        let copy = value.clone();
        value.push_str(&copy);
    }
}

impl<'a> Handler<&'a mut bool> for DoubleInPlace {
    type Output = ();
    fn handle(&mut self, _value: &'a mut bool) {}
}

#[test]
fn test_visit_mut_mutates_the_live_value() {
    let mut scalar = Scalar::new(21u8);
    scalar.visit_mut(DoubleInPlace);
    assert_eq!(scalar.peek::<u8>(), Some(&42));

    let mut scalar = Scalar::new(String::from("ab"));
    scalar.visit_mut(DoubleInPlace);
    assert_eq!(scalar.peek::<String>().map(String::as_str), Some("abab"));
}

/// Takes members by value.
struct Consume;

impl Handler<u8> for Consume {
    type Output = String;
    fn handle(&mut self, value: u8) -> String {
        format!("byte {}", value)
    }
}

impl Handler<char> for Consume {
    type Output = String;
    fn handle(&mut self, value: char) -> String {
        format!("char {}", value)
    }
}

impl Handler<String> for Consume {
    type Output = String;
    fn handle(&mut self, value: String) -> String {
        format!("string {}", value)
    }
}

impl Handler<bool> for Consume {
    type Output = String;
    fn handle(&mut self, value: bool) -> String {
        format!("bool {}", value)
    }
}

#[test]
fn test_visit_cloned_leaves_the_variant_untouched() {
    let scalar = Scalar::new(String::from("keep"));

    assert_eq!(scalar.visit_cloned(Consume), "string keep");

    // Still holds the same value afterwards.
    assert_eq!(scalar.peek::<String>().map(String::as_str), Some("keep"));
    assert!(scalar.is_type::<String>());
}

#[test]
fn test_visit_cloned_without_a_clone_derive() {
    // The enum itself carries no derives at all; only the member types
    // need to be cloneable.
    variant! {
        enum Plain {
            Count(u32),
            Label(String),
        }
    }

    struct Take;

    impl Handler<u32> for Take {
        type Output = String;
        fn handle(&mut self, value: u32) -> String {
            format!("count {}", value)
        }
    }

    impl Handler<String> for Take {
        type Output = String;
        fn handle(&mut self, value: String) -> String {
            format!("label {}", value)
        }
    }

    let plain = Plain::new(String::from("ready"));
    assert_eq!(plain.visit_cloned(Take), "label ready");

    // Still holds its value: only the active member was cloned out.
    assert_eq!(plain.peek::<String>().map(String::as_str), Some("ready"));

    let number = Plain::new(3u32);
    assert_eq!(number.visit_cloned(Take), "count 3");
}

#[test]
fn test_into_visit_consumes_the_variant() {
    let scalar = Scalar::new(7u8);
    assert_eq!(scalar.into_visit(Consume), "byte 7");
}

#[test]
fn test_visit_reads_without_mutating() {
    let scalar = Scalar::new(42u8);

    assert_eq!(scalar.visit(ToStringHandler), "byte 42");

    // A by-reference visit observes, it does not change the stored value.
    assert_eq!(scalar.peek::<u8>(), Some(&42));
    assert_eq!(scalar.discriminant(), 0);
}
