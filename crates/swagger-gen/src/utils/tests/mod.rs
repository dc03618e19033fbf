mod spec_loader;
