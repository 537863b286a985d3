//! The generation loop.
//!
//! A simulation moves `Uninitialized -> Seeded -> Running -> Complete`.
//! Generation 0 has only the centre column alive; every later generation is
//! produced by optionally injecting sparks into the current row and then
//! applying the rule with wrap-around neighbours. The full history is kept.

use crate::error::{CaError, Result};
use crate::geometry::Dimensions;
use crate::injection::InjectionSchedule;
use crate::metrics::{RunMetrics, Stopwatch};
use crate::render::HistoryView;
use crate::rule::RuleTable;
use cellblock_data::{CellRow, GenerationHistory, SeedPair};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Uninitialized,
    Seeded,
    Running,
    Complete,
}

/// One run of an elementary automaton. Not meant to be reused across blocks.
#[derive(Debug, Clone)]
pub struct CaSimulation {
    dims: Dimensions,
    state: SimulationState,
    rule: Option<RuleTable>,
    schedule: InjectionSchedule,
    cells: CellRow,
    history: GenerationHistory,
    generation: usize,
    metrics: RunMetrics,
}

impl CaSimulation {
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            state: SimulationState::Uninitialized,
            rule: None,
            schedule: InjectionSchedule::empty(),
            cells: CellRow::dead(dims.row_width),
            history: GenerationHistory::with_capacity(dims.row_height),
            generation: 0,
            metrics: RunMetrics::default(),
        }
    }

    /// Parses the rule, installs the injection schedule and starts the run.
    pub fn init(&mut self, rule: i64, pairs: Vec<SeedPair>, point_count: usize) -> Result<()> {
        match self.state {
            SimulationState::Uninitialized => {}
            SimulationState::Complete => {
                return Err(CaError::AlreadyComplete {
                    generations: self.history.len(),
                })
            }
            SimulationState::Seeded | SimulationState::Running => {
                return Err(CaError::AlreadyStarted {
                    generation: self.generation,
                })
            }
        }
        let table = RuleTable::parse(rule)?;
        self.rule = Some(table);
        self.schedule = InjectionSchedule::new(pairs, point_count);
        self.state = SimulationState::Seeded;
        self.start()
    }

    /// Writes generation 0: a single live cell at `floor(width / 2)`.
    ///
    /// Only valid once, straight after seeding; a running or finished
    /// simulation is never rewound.
    pub fn start(&mut self) -> Result<()> {
        match self.state {
            SimulationState::Seeded => {}
            SimulationState::Uninitialized => return Err(CaError::NotStarted),
            SimulationState::Running => {
                return Err(CaError::AlreadyStarted {
                    generation: self.generation,
                })
            }
            SimulationState::Complete => {
                return Err(CaError::AlreadyComplete {
                    generations: self.history.len(),
                })
            }
        }
        let width = self.dims.row_width;
        let mut first = CellRow::dead(width);
        first.set_alive(width / 2);

        self.history = GenerationHistory::with_capacity(self.dims.row_height);
        self.metrics = RunMetrics::default();
        self.metrics.record_generation(first.alive_count());
        self.history.push(first.clone());
        self.cells = first;
        self.generation = 1;
        self.state = SimulationState::Running;
        self.check_complete();
        Ok(())
    }

    /// Produces one generation.
    pub fn step(&mut self) -> Result<()> {
        match self.state {
            SimulationState::Uninitialized | SimulationState::Seeded => {
                return Err(CaError::NotStarted)
            }
            SimulationState::Complete => {
                return Err(CaError::AlreadyComplete {
                    generations: self.history.len(),
                })
            }
            SimulationState::Running => {}
        }
        let rule = self.rule.ok_or(CaError::NotStarted)?;

        let fires = self
            .schedule
            .triggers_at(self.generation, self.dims.row_height);
        for _ in 0..fires {
            if let Some(column) = self.schedule.next_injection_target(&mut self.cells) {
                self.metrics.record_injection();
                tracing::debug!(generation = self.generation, column, "Injected spark");
            }
        }

        let next = next_row(&rule, &self.cells);
        self.metrics.record_generation(next.alive_count());
        self.history.push(next.clone());
        self.cells = next;
        self.generation += 1;
        self.check_complete();
        Ok(())
    }

    /// Steps until every generation has been produced.
    pub fn generate_all(&mut self) -> Result<&GenerationHistory> {
        let watch = Stopwatch::start();
        while !self.is_complete() {
            self.step()?;
        }
        watch.stop(&mut self.metrics);
        tracing::debug!(
            generations = self.history.len(),
            injections = self.metrics.injections,
            elapsed_us = self.metrics.elapsed_micros,
            "Simulation complete"
        );
        Ok(&self.history)
    }

    fn check_complete(&mut self) {
        if self.generation >= self.dims.row_height {
            self.state = SimulationState::Complete;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == SimulationState::Complete
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Index of the next generation to be produced.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rule(&self) -> Option<&RuleTable> {
        self.rule.as_ref()
    }

    pub fn schedule(&self) -> &InjectionSchedule {
        &self.schedule
    }

    /// The row the next step reads from.
    pub fn current_row(&self) -> &CellRow {
        &self.cells
    }

    pub fn history(&self) -> &GenerationHistory {
        &self.history
    }

    pub fn view(&self) -> HistoryView<'_> {
        HistoryView::new(&self.history)
    }

    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    pub fn into_parts(self) -> (GenerationHistory, RunMetrics) {
        (self.history, self.metrics)
    }
}

/// Applies `rule` to every cell of `row`; the row wraps at both ends.
pub fn next_row(rule: &RuleTable, row: &CellRow) -> CellRow {
    let dim = row.len();
    let cells = (0..dim)
        .map(|i| {
            let left = row.get((i + dim - 1) % dim);
            let center = row.get(i);
            let right = row.get((i + 1) % dim);
            rule.next_state(left, center, right)
        })
        .collect();
    CellRow::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(width: usize, height: usize) -> CaSimulation {
        CaSimulation::new(Dimensions::new(width, height).unwrap())
    }

    fn pair_for(trigger: usize, column: usize) -> SeedPair {
        SeedPair::new((trigger as f64 + 0.5) / 255.0, (column as f64 + 0.5) / 255.0)
    }

    #[test]
    fn test_start_sets_center() {
        let mut s = sim(10, 5);
        s.init(204, Vec::new(), 0).unwrap();
        assert_eq!(s.state(), SimulationState::Running);
        assert_eq!(s.generation(), 1);
        assert_eq!(
            s.history().row(0).unwrap().cells(),
            &[0, 0, 0, 0, 0, 1, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_rule_204_keeps_row() {
        let mut s = sim(10, 5);
        s.init(204, Vec::new(), 0).unwrap();
        let history = s.generate_all().unwrap();
        assert_eq!(history.len(), 5);
        let first = history.row(0).unwrap().clone();
        for row in history.rows() {
            assert_eq!(row, &first);
        }
    }

    #[test]
    fn test_rule_30_first_generations() {
        let mut s = sim(7, 3);
        s.init(30, Vec::new(), 0).unwrap();
        let history = s.generate_all().unwrap();
        assert_eq!(history.row(0).unwrap().cells(), &[0, 0, 0, 1, 0, 0, 0]);
        assert_eq!(history.row(1).unwrap().cells(), &[0, 0, 1, 1, 1, 0, 0]);
        assert_eq!(history.row(2).unwrap().cells(), &[0, 1, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_neighbourhood_wraps() {
        let mut s = sim(3, 3);
        s.init(90, Vec::new(), 0).unwrap();
        let history = s.generate_all().unwrap();
        assert_eq!(history.row(1).unwrap().cells(), &[1, 0, 1]);
        assert_eq!(history.row(2).unwrap().cells(), &[1, 0, 1]);
    }

    #[test]
    fn test_injection_applied_before_rule() {
        let mut s = sim(10, 5);
        s.init(204, vec![pair_for(2, 7)], 1).unwrap();
        s.generate_all().unwrap();
        let history = s.history();
        // The injected row itself is not rewritten in history.
        assert_eq!(history.row(1).unwrap().alive_count(), 1);
        assert_eq!(
            history.row(2).unwrap().cells(),
            &[0, 0, 0, 0, 0, 1, 0, 1, 0, 0]
        );
        assert_eq!(history.row(4).unwrap(), history.row(2).unwrap());
        assert_eq!(s.metrics().injections, 1);
    }

    #[test]
    fn test_generation_zero_never_injects() {
        let mut s = sim(10, 5);
        s.init(204, vec![pair_for(0, 1)], 1).unwrap();
        s.generate_all().unwrap();
        assert_eq!(s.metrics().injections, 0);
        assert_eq!(s.history().alive_count(), 5);
    }

    #[test]
    fn test_step_after_complete_fails() {
        let mut s = sim(4, 2);
        s.init(110, Vec::new(), 0).unwrap();
        s.step().unwrap();
        assert!(s.is_complete());
        assert_eq!(
            s.step(),
            Err(CaError::AlreadyComplete { generations: 2 })
        );
        // generate_all on a finished run is a no-op
        assert_eq!(s.generate_all().unwrap().len(), 2);
    }

    #[test]
    fn test_finished_run_cannot_restart() {
        let mut s = sim(10, 5);
        s.init(204, vec![pair_for(2, 1), pair_for(9, 7)], 1).unwrap();
        let first = s.generate_all().unwrap().clone();
        assert_eq!(
            s.start(),
            Err(CaError::AlreadyComplete { generations: 5 })
        );
        assert!(s.is_complete());
        assert_eq!(
            s.init(30, Vec::new(), 0),
            Err(CaError::AlreadyComplete { generations: 5 })
        );
        assert_eq!(s.generate_all().unwrap(), &first);
        assert_eq!(s.metrics().injections, 1);
    }

    #[test]
    fn test_running_run_cannot_restart() {
        let mut s = sim(10, 5);
        s.init(30, Vec::new(), 0).unwrap();
        s.step().unwrap();
        assert_eq!(s.start(), Err(CaError::AlreadyStarted { generation: 2 }));
        assert_eq!(s.state(), SimulationState::Running);
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn test_height_one_completes_at_start() {
        let mut s = sim(4, 1);
        s.init(30, Vec::new(), 0).unwrap();
        assert!(s.is_complete());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_uninitialized_rejects_step() {
        let mut s = sim(4, 4);
        assert_eq!(s.state(), SimulationState::Uninitialized);
        assert_eq!(s.step(), Err(CaError::NotStarted));
        assert_eq!(s.start(), Err(CaError::NotStarted));
    }

    #[test]
    fn test_invalid_rule_rejected() {
        let mut s = sim(4, 4);
        assert_eq!(s.init(300, Vec::new(), 0), Err(CaError::InvalidRule(300)));
        assert_eq!(s.state(), SimulationState::Uninitialized);
    }

    #[test]
    fn test_rows_keep_width() {
        let mut s = sim(17, 40);
        s.init(
            110,
            vec![pair_for(3, 2), pair_for(9, 16), pair_for(20, 5)],
            3,
        )
        .unwrap();
        let history = s.generate_all().unwrap();
        assert_eq!(history.len(), 40);
        assert!(history.rows().iter().all(|r| r.len() == 17));
    }
}
