use sovran_variant::{variant, Handler};

variant! {
    /// A metric that is either a plain count or a running average.
    #[derive(Debug, Clone)]
    pub enum Metric {
        Count(u64),
        Average(f64),
    }
}

/// Folds one observation into the live metric, whatever its shape.
struct Observe(f64);

impl<'a> Handler<&'a mut u64> for Observe {
    type Output = ();
    fn handle(&mut self, value: &'a mut u64) {
        *value += 1;
    }
}

impl<'a> Handler<&'a mut f64> for Observe {
    type Output = ();
    fn handle(&mut self, value: &'a mut f64) {
        *value = (*value + self.0) / 2.0;
    }
}

fn main() {
    let mut requests = Metric::new(0u64);
    let mut latency = Metric::new(12.0f64);

    // Update in place through the dispatcher.
    for sample in [10.0, 14.0, 11.0] {
        requests.visit_mut(Observe(sample));
        latency.visit_mut(Observe(sample));
    }

    println!("requests = {:?}", requests.peek::<u64>());
    println!("latency  = {:?}", latency.peek::<f64>());

    // Or update in place with peek_mut when the member type is known.
    if let Some(count) = requests.peek_mut::<u64>() {
        *count += 100;
    }
    println!("requests after bulk import = {:?}", requests.peek::<u64>());

    // The discriminant mirrors definition order: Count first, Average second.
    println!(
        "discriminants: requests={}, latency={} (of {})",
        requests.discriminant(),
        latency.discriminant(),
        Metric::member_count()
    );
}
