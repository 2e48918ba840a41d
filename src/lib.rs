pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;
pub mod logging;

pub use application::{
    transition, Effect, FetchPredictionsUseCase, Message, PredictionClient, ThemeSink,
    ViewController,
};

pub use cli::{Commands, OutputFormat, ThemeArg};

pub use connector::{
    Container, ContainerConfig, GeminiPredictionClient, GeminiSettings, MockBehavior,
    MockPredictionClient, Router,
};

pub use domain::{
    Card, DomainError, Prediction, ResultArea, Theme, ViewState, FETCH_FAILED_MESSAGE,
    LOADING_CAPTION, PREDICTION_COUNT, VALIDATION_MESSAGE,
};
