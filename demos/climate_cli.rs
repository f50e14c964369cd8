//! CLI driving a climate adapter against a simulated controller device.
//!
//! Run with: cargo run --example climate_cli -- --help

use clap::{Parser, Subcommand};
use lutron_climate_rs::{
    ClimateAdapter, ControllerInfo, Error, FanMode, HvacDevice, HvacMode, NativeFanMode,
    NativeTempUnit, OperatingMode, TemperatureRequest, TemperatureUnit,
};

#[derive(Parser)]
#[command(name = "climate-cli")]
#[command(about = "Exercise a climate adapter against a simulated HVAC device", long_about = None)]
struct Cli {
    /// Operating modes the simulated device declares
    #[arg(long, value_delimiter = ',', default_value = "Off,Heat,Cool,Auto")]
    op_modes: Vec<String>,

    /// Fan modes the simulated device declares
    #[arg(long, value_delimiter = ',', default_value = "Auto,On")]
    fan_modes: Vec<String>,

    /// Operating mode the device starts in
    #[arg(long, default_value = "Heat")]
    mode: String,

    /// Report temperatures in Fahrenheit
    #[arg(short, long)]
    fahrenheit: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adapter diagnostics
    Status,

    /// Set the hvac mode (off, heat, cool, heat_cool, fan_only, dry)
    Mode { mode: HvacMode },

    /// Set the fan mode (auto, on, off, high, medium, low)
    Fan { mode: FanMode },

    /// Set a single target temperature
    Target { temp: f64 },

    /// Set the heat/cool setpoint range
    Range { low: f64, high: f64 },
}

/// Device whose queries always succeed and whose writes are echoed back.
struct SimulatedDevice {
    op_modes: Vec<String>,
    fan_modes: Vec<String>,
    op_mode: String,
    fan_mode: String,
    heat_setpoint: f64,
    cool_setpoint: f64,
    unit: Option<NativeTempUnit>,
}

impl HvacDevice for SimulatedDevice {
    fn name(&self) -> &str {
        "Simulated HVAC"
    }
    fn integration_id(&self) -> u16 {
        1
    }
    fn op_modes(&self) -> Vec<String> {
        self.op_modes.clone()
    }
    fn fan_modes(&self) -> Vec<String> {
        self.fan_modes.clone()
    }
    fn last_current_temp(&self) -> Option<f64> {
        match self.unit {
            Some(NativeTempUnit::F) => Some(70.5),
            _ => Some(21.4),
        }
    }
    fn last_op_mode(&self) -> Option<String> {
        Some(self.op_mode.clone())
    }
    fn last_heat_setpoint(&self) -> Option<f64> {
        Some(self.heat_setpoint)
    }
    fn last_cool_setpoint(&self) -> Option<f64> {
        Some(self.cool_setpoint)
    }
    fn last_fan_mode(&self) -> Option<String> {
        Some(self.fan_mode.clone())
    }
    fn last_status(&self) -> Option<String> {
        Some("CoolIdle".to_string())
    }
    fn query_current_temp(&mut self) -> Result<(), Error> {
        Ok(())
    }
    fn query_op_mode(&mut self) -> Result<(), Error> {
        Ok(())
    }
    fn query_cool_setpoint(&mut self) -> Result<(), Error> {
        Ok(())
    }
    fn query_fan_mode(&mut self) -> Result<(), Error> {
        Ok(())
    }
    fn query_status(&mut self) -> Result<(), Error> {
        Ok(())
    }
    fn set_op_mode(&mut self, mode: OperatingMode) -> Result<(), Error> {
        self.op_mode = mode.to_string();
        Ok(())
    }
    fn set_fan_mode(&mut self, mode: NativeFanMode) -> Result<(), Error> {
        self.fan_mode = mode.to_string();
        Ok(())
    }
    fn set_heat_setpoint(&mut self, temp: f64) -> Result<(), Error> {
        self.heat_setpoint = temp;
        Ok(())
    }
    fn set_cool_setpoint(&mut self, temp: f64) -> Result<(), Error> {
        self.cool_setpoint = temp;
        Ok(())
    }
    fn set_temp_unit(&mut self, unit: NativeTempUnit) -> Result<(), Error> {
        self.unit = Some(unit);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let device = SimulatedDevice {
        op_modes: cli.op_modes,
        fan_modes: cli.fan_modes,
        op_mode: cli.mode,
        fan_mode: "Auto".to_string(),
        heat_setpoint: 20.0,
        cool_setpoint: 25.0,
        unit: None,
    };
    let unit = if cli.fahrenheit {
        TemperatureUnit::Fahrenheit
    } else {
        TemperatureUnit::Celsius
    };

    let controller = ControllerInfo::new("simulated");
    let mut climate = ClimateAdapter::new("", device, &controller, unit)?;

    match cli.command {
        Commands::Status => {}
        Commands::Mode { mode } => climate.set_hvac_mode(mode)?,
        Commands::Fan { mode } => climate.set_fan_mode(mode)?,
        Commands::Target { temp } => climate.set_temperature(&TemperatureRequest::from(temp))?,
        Commands::Range { low, high } => {
            let mut request = TemperatureRequest::new();
            request.target_temp_low(low).target_temp_high(high);
            climate.set_temperature(&request)?;
        }
    }

    climate.refresh()?;
    println!("{}", serde_json::to_string_pretty(&climate.diagnostics())?);
    Ok(())
}
