use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::ring::{self, State};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::toast::Toast;
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use gyro::{Point, Ring, Size};
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

pub struct AppInit {
    pub config: Config,
    pub config_path: PathBuf,
    /// `false` forces idle spin off regardless of the config file.
    pub spin_enabled: bool,
    pub events: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub state: Rc<RefCell<State>>,
    pub config: Config,
    pub config_path: PathBuf,
    pub spin_enabled: bool,
    pub toast: Toast,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Resize(Size),
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    PointerCancel,
    Hover(Point),
    Leave,
    Tick(Duration),
    Notify(String),
    ToastExpired(u64),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Rondel"),
            set_default_size: (window::DEFAULT_WIDTH, window::DEFAULT_HEIGHT),
            add_css_class: "rondel-window",

            #[name = "overlay"]
            gtk::Overlay {
                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "rondel-surface",

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(Size::new(width as f64, height as f64)));
                    },

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |_, x, y| {
                            sender.input(AppMsg::PointerDown(Point::new(x, y)));
                        },
                        connect_drag_update[sender] => move |gesture, dx, dy| {
                            if let Some((x, y)) = gesture.start_point() {
                                sender.input(AppMsg::PointerMove(Point::new(x + dx, y + dy)));
                            }
                        },
                        connect_drag_end[sender] => move |gesture, dx, dy| {
                            match gesture.start_point() {
                                Some((x, y)) => {
                                    sender.input(AppMsg::PointerUp(Point::new(x + dx, y + dy)))
                                }
                                None => sender.input(AppMsg::PointerCancel),
                            }
                        },
                        connect_cancel[sender] => move |_, _| {
                            sender.input(AppMsg::PointerCancel);
                        }
                    },

                    add_controller = gtk::EventControllerMotion {
                        connect_motion[sender] => move |_, x, y| {
                            sender.input(AppMsg::Hover(Point::new(x, y)));
                        },
                        connect_leave[sender] => move |_| {
                            sender.input(AppMsg::Leave);
                        }
                    }
                },

                add_overlay = &gtk::Revealer {
                    set_halign: gtk::Align::Center,
                    set_valign: gtk::Align::Start,
                    set_margin_top: 48,
                    set_can_target: false,
                    set_transition_type: gtk::RevealerTransitionType::Crossfade,
                    #[watch]
                    set_reveal_child: model.toast.is_visible(),

                    #[wrap(Some)]
                    set_child = &gtk::Label {
                        add_css_class: "rondel-toast",
                        #[watch]
                        set_label: model.toast.message(),
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            config_path,
            spin_enabled,
            events,
        } = init;

        theme::load_css();

        let on_center_clicked = {
            let sender = sender.clone();
            move || sender.input(AppMsg::Notify("Center Button Clicked".to_string()))
        };
        let on_item_clicked = {
            let sender = sender.clone();
            move |index| sender.input(AppMsg::Notify(format!("Button {} clicked", index)))
        };
        let ring = Ring::new(
            config.ring_configuration(),
            config.spin.auto_spin().filter(|_| spin_enabled),
            on_center_clicked,
            on_item_clicked,
        )
        .with_touch_slop(config.touch_slop);
        let state = State::new(ring, config.placement());

        let model = AppModel {
            state: Rc::new(RefCell::new(state)),
            config,
            config_path,
            spin_enabled,
            toast: Toast::default(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, _, _| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                if let Err(e) = ring::draw(cr, &state_draw.borrow(), &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let tick_sender = sender.clone();
        let state_tick = model.state.clone();
        window::on_each_frame(
            &widgets.drawing_area,
            move || state_tick.try_borrow().is_ok_and(|state| state.wants_ticks()),
            move |dt| tick_sender.input(AppMsg::Tick(dt)),
        );

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = events.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        let redraw = match msg {
            AppMsg::Resize(size) => {
                self.state.borrow_mut().resize(size);
                true
            }
            AppMsg::PointerDown(point) => {
                self.state.borrow_mut().ring.pointer_down(point);
                false
            }
            AppMsg::PointerMove(point) => self.state.borrow_mut().ring.pointer_move(point),
            AppMsg::PointerUp(point) => self.state.borrow_mut().ring.pointer_up(point),
            AppMsg::PointerCancel => self.state.borrow_mut().ring.pointer_cancel(),
            AppMsg::Hover(point) => self.state.borrow_mut().update_hover(point),
            AppMsg::Leave => self.state.borrow_mut().clear_hover(),
            AppMsg::Tick(dt) => {
                let mut state = self.state.borrow_mut();
                let moved = state.ring.tick(dt);
                if moved {
                    state.refresh_hover();
                }
                moved
            }
            AppMsg::Notify(message) => {
                log::info!("{}", message);
                let generation = self.toast.show(message);
                glib::timeout_add_local_once(self.config.toast_duration(), move || {
                    sender.input(AppMsg::ToastExpired(generation));
                });
                false
            }
            AppMsg::ToastExpired(generation) => {
                self.toast.expire(generation);
                false
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    self.state
                        .borrow_mut()
                        .reconfigure(&new_config, self.spin_enabled);
                    self.config = new_config;
                    log::info!("Configuration reloaded");
                    true
                }
                Err(e) => {
                    log::error!("Failed to reload config: {}", e);
                    false
                }
            },
        };

        if redraw {
            self.drawing_area.queue_draw();
        }
    }
}
