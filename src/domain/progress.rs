use log::info;

/// Track progress of tournament sheet extraction
#[derive(Debug, Default)]
pub struct SheetProgress {
    total: usize,
    written: usize,
    empty: usize,
    entries: usize,
}

impl SheetProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub fn record_written(&mut self, entries: usize) {
        self.written += 1;
        self.entries += entries;
        self.log_progress();
    }

    /// Sheet produced no entries (failed or had no complete team rows)
    pub fn record_empty(&mut self) {
        self.empty += 1;
        self.log_progress();
    }

    pub fn current_count(&self) -> usize {
        self.written + self.empty
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn empty(&self) -> usize {
        self.empty
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if should_log(current, self.total) {
            info!(
                "  → Progress: {}/{} sheets ({} written, {} empty, {} team entries)",
                current, self.total, self.written, self.empty, self.entries
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut progress = SheetProgress::new(3);
        progress.record_written(12);
        progress.record_empty();
        progress.record_written(8);

        assert_eq!(progress.current_count(), 3);
        assert_eq!(progress.written(), 2);
        assert_eq!(progress.empty(), 1);
        assert_eq!(progress.entries(), 20);
    }
}
