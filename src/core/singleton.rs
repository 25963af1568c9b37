use std::sync::OnceLock;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

/// Process-wide single instance. There is no public constructor; use [`Singleton::instance`].
#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            tracing::debug!("Creating Singleton instance");
            Singleton { _private: () }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_is_shared() {
        let first = Singleton::instance();
        let second = Singleton::instance();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_instance_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| Singleton::instance() as *const Singleton as usize))
            .collect();

        let main_addr = Singleton::instance() as *const Singleton as usize;
        for handle in handles {
            assert_eq!(handle.join().unwrap(), main_addr);
        }
    }
}
