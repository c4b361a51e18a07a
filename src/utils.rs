macro_rules! step {
  ($name:expr, $($tail:tt)*) => {
    {
      log::info!("* {}", $name);
      let now = std::time::Instant::now();
      let value = $($tail)*;
      log::debug!("Done  `{}` ({} ms)", $name, now.elapsed().as_millis());
      value
    }
  };
}
