use crate::automation::device::{Clock, InputDevice};
use crate::automation::session::DasSession;
use crate::constants::{ARGUMENT_OF_PERIGEE_DEG, RAAN_DEG};
use crate::errors::{CellFault, ConfigError, InterpretError, ParseFault, SweepError};
use crate::interpreter::ResultInterpreter;
use crate::models::controls::{Control, ScreenPoint};
use crate::models::grid::SweepGrid;
use crate::models::layout::FormField;
use crate::models::table::ResultTable;
use crate::physics::orbital::OrbitalMechanics;

/// A cell left empty because DAS did not respond as expected.
#[derive(Debug, Clone, PartialEq)]
pub struct FailedCell {
    pub altitude_km: f64,
    pub ratio: f64,
    pub fault: CellFault,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepReport {
    /// Number of times the copied lifetime text was interpreted.
    pub interpretations: usize,
    pub failed_cells: Vec<FailedCell>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.failed_cells.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutcome {
    pub table: ResultTable,
    pub report: SweepReport,
}

enum CellError {
    Fault(CellFault),
    Parse(ParseFault),
}

impl From<CellFault> for CellError {
    fn from(fault: CellFault) -> Self {
        CellError::Fault(fault)
    }
}

/// Drives DAS over every (altitude, ratio) cell of the grid, one altitude row
/// at a time, strictly in order.
pub struct SweepDriver<D: InputDevice, C: Clock> {
    session: DasSession<D, C>,
    grid: SweepGrid,
    interpreter: ResultInterpreter,
}

impl<D: InputDevice, C: Clock> SweepDriver<D, C> {
    pub fn new(session: DasSession<D, C>, grid: SweepGrid, start_year: i32) -> Self {
        Self {
            session,
            grid,
            interpreter: ResultInterpreter::new(start_year),
        }
    }

    pub fn run(mut self) -> Result<SweepOutcome, SweepError> {
        let mut table = ResultTable::new(&self.grid);
        let mut report = SweepReport::default();
        let start_year = self.interpreter.start_year().to_string();

        tracing::info!(
            start_year = %start_year,
            altitudes = self.grid.altitudes_km().len(),
            ratios = self.grid.ratios().len(),
            "Starting sweep"
        );

        self.session.reset()?;
        let start_year_field = self.session.control(Control::StartYear);
        self.session
            .set_field(start_year_field, &start_year)
            .map_err(SweepError::Precondition)?;

        let altitudes = self.grid.altitudes_km().to_vec();
        let ratios = self.grid.ratios().to_vec();

        for (j, &altitude_km) in altitudes.iter().enumerate() {
            let inclination = OrbitalMechanics::sso_inclination(altitude_km)
                .ok_or(ConfigError::NoSunSynchronousOrbit(altitude_km))?;
            tracing::info!(altitude_km, inclination, "Entering orbit row");

            if let Err(fault) = self.enter_orbit(altitude_km, inclination) {
                tracing::warn!(altitude_km, error = %fault, "Orbit row could not be entered, skipping");
                report
                    .failed_cells
                    .extend(ratios.iter().map(|&ratio| FailedCell {
                        altitude_km,
                        ratio,
                        fault: fault.clone(),
                    }));
                self.session.move_to(start_year_field)?;
                continue;
            }

            let anchor = self.session.layout().field(FormField::AreaToMassRatio);
            for (i, &ratio) in ratios.iter().enumerate() {
                match self.solve(anchor, altitude_km, ratio, &mut report) {
                    Ok(years) => {
                        tracing::debug!(altitude_km, ratio, years, "Cell solved");
                        table.set(j, i, years);
                    }
                    Err(CellError::Fault(fault)) => {
                        tracing::warn!(altitude_km, ratio, error = %fault, "Cell failed");
                        report.failed_cells.push(FailedCell {
                            altitude_km,
                            ratio,
                            fault,
                        });
                    }
                    Err(CellError::Parse(fault)) => {
                        tracing::error!(error = %fault, "Unrecognised result text");
                        return Err(fault.into());
                    }
                }
                self.session.move_to(anchor)?;
            }

            self.session.move_to(start_year_field)?;
        }

        tracing::info!(
            interpretations = report.interpretations,
            failed = report.failed_cells.len(),
            "Sweep finished"
        );
        Ok(SweepOutcome { table, report })
    }

    /// Perigee and apogee altitude, inclination, RAAN and argument of perigee.
    fn enter_orbit(&mut self, altitude_km: f64, inclination: f64) -> Result<(), CellFault> {
        let altitude = altitude_km.to_string();
        let inputs = [
            (FormField::PerigeeAltitude, altitude.clone()),
            (FormField::ApogeeAltitude, altitude),
            (FormField::Inclination, inclination.to_string()),
            (FormField::Raan, RAAN_DEG.to_string()),
            (FormField::ArgumentOfPerigee, ARGUMENT_OF_PERIGEE_DEG.to_string()),
        ];

        for (field, value) in inputs {
            let point = self.session.layout().field(field);
            tracing::trace!(%field, %value, "Setting orbit input");
            self.session.set_field(point, &value)?;
        }
        Ok(())
    }

    /// One cell: type the ratio, run DAS, interpret the lifetime field.
    fn solve(
        &mut self,
        anchor: ScreenPoint,
        altitude_km: f64,
        ratio: f64,
        report: &mut SweepReport,
    ) -> Result<f64, CellError> {
        self.session.set_field(anchor, &ratio.to_string())?;
        self.session
            .trigger_computation()
            .map_err(CellFault::from)?;

        let lifetime_field = self.session.control(Control::OrbitLifetime);
        let last_year_field = self.session.control(Control::LastYear);
        let raw = self.session.read_field(lifetime_field)?;

        report.interpretations += 1;
        let session = &mut self.session;
        self.interpreter
            .interpret(&raw, || session.read_field(last_year_field))
            .map_err(|err| match err {
                InterpretError::Read(fault) => CellError::Fault(fault),
                InterpretError::Text(source) => CellError::Parse(ParseFault {
                    altitude_km,
                    ratio,
                    source,
                }),
            })
    }
}
